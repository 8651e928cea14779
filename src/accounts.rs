use chrono::Utc;
use log::{debug, warn};
use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewUser, User};
use crate::storage::{SESSION_KEY, Storage, USERS_KEY};

/// Owns the registered-user collection and the single active session.
/// Registration implicitly logs the new user in, matching the sign-up flow
/// of the surrounding app.
pub struct AccountStore<'a> {
    storage: &'a dyn Storage,
}

impl<'a> AccountStore<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Full persisted collection in insertion order. A missing or malformed
    /// block reads as empty.
    pub fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = match self.storage.get(USERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("user collection unreadable, treating as empty: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(users)
    }

    pub fn register(&self, candidate: NewUser) -> StoreResult<User> {
        let mut users = self.list_users()?;
        if users.iter().any(|u| u.email == candidate.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: generate_id(),
            avatar: placeholder_avatar(&candidate.name),
            name: candidate.name,
            email: candidate.email,
            password: candidate.password,
            department: candidate.department,
            year: candidate.year,
            college: candidate.college,
            bio: candidate.bio,
            role: candidate.role,
            skills: candidate.skills,
            gigs_posted: 0,
            gigs_completed: 0,
            rating: 0.0,
            created_at: Utc::now().to_rfc3339(),
        };

        users.push(user.clone());
        self.write_users(&users)?;
        self.write_session(&user)?;
        debug!("registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        let users = self.list_users()?;
        let user = users
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(StoreError::InvalidCredentials)?;
        self.write_session(&user)?;
        debug!("login for user {}", user.id);
        Ok(user)
    }

    /// Current session, or None if unset or structurally unreadable.
    pub fn session(&self) -> StoreResult<Option<User>> {
        let session = match self.storage.get(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("session slot unreadable, treating as absent: {}", e);
                    None
                }
            },
            None => None,
        };
        Ok(session)
    }

    /// Idempotent; clearing an absent session is fine.
    pub fn logout(&self) -> StoreResult<()> {
        self.storage.remove(SESSION_KEY)?;
        Ok(())
    }

    /// Writes an edited profile back into the master collection (matched by
    /// id) and refreshes the session copy. An unknown id only updates the
    /// session.
    pub fn update_profile(&self, updated: &User) -> StoreResult<()> {
        let mut users = self.list_users()?;
        if let Some(slot) = users.iter_mut().find(|u| u.id == updated.id) {
            *slot = updated.clone();
            self.write_users(&users)?;
        } else {
            warn!("profile update for unknown user id {}", updated.id);
        }
        self.write_session(updated)?;
        Ok(())
    }

    fn write_users(&self, users: &[User]) -> StoreResult<()> {
        let raw = serde_json::to_string(users).map_err(anyhow::Error::from)?;
        self.storage.set(USERS_KEY, &raw)?;
        Ok(())
    }

    fn write_session(&self, user: &User) -> StoreResult<()> {
        let raw = serde_json::to_string(user).map_err(anyhow::Error::from)?;
        self.storage.set(SESSION_KEY, &raw)?;
        Ok(())
    }
}

pub fn generate_id() -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

fn placeholder_avatar(name: &str) -> String {
    let seed: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed)
}
