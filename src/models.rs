use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Poster,
    Hustler,
    Both,
}

impl Role {
    pub fn is_hustler(self) -> bool {
        matches!(self, Role::Hustler | Role::Both)
    }

    pub fn is_poster(self) -> bool {
        matches!(self, Role::Poster | Role::Both)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Poster => "poster",
            Role::Hustler => "hustler",
            Role::Both => "both",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poster" => Ok(Role::Poster),
            "hustler" => Ok(Role::Hustler),
            "both" => Ok(Role::Both),
            other => Err(format!("unknown role '{}' (poster, hustler, both)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String, // stored verbatim; see DESIGN.md on hardening
    pub department: String,
    pub year: String,
    pub college: String,
    pub bio: String,
    pub avatar: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub gigs_posted: u32,
    pub gigs_completed: u32,
    pub rating: f64,
    pub created_at: String,
}

/// Registration payload: everything the caller supplies. The store fills in
/// id, avatar, stats, and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub year: String,
    pub college: String,
    pub bio: String,
    pub role: Role,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Design,
    Video,
    Data,
    Code,
    Writing,
    Others,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Design => "Design",
            Category::Video => "Video",
            Category::Data => "Data",
            Category::Code => "Code",
            Category::Writing => "Writing",
            Category::Others => "Others",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "design" => Ok(Category::Design),
            "video" => Ok(Category::Video),
            "data" => Ok(Category::Data),
            "code" => Ok(Category::Code),
            "writing" => Ok(Category::Writing),
            "others" | "other" => Ok(Category::Others),
            other => Err(format!(
                "unknown category '{}' (design, video, data, code, writing, others)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GigStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl fmt::Display for GigStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GigStatus::Open => "Open",
            GigStatus::InProgress => "In Progress",
            GigStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "On Campus")]
    OnCampus,
    Remote,
    Hybrid,
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LocationType::OnCampus => "On Campus",
            LocationType::Remote => "Remote",
            LocationType::Hybrid => "Hybrid",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on campus" | "on-campus" | "campus" => Ok(LocationType::OnCampus),
            "remote" => Ok(LocationType::Remote),
            "hybrid" => Ok(LocationType::Hybrid),
            other => Err(format!(
                "unknown location type '{}' (on-campus, remote, hybrid)",
                other
            )),
        }
    }
}

/// Snapshot of the poster's public profile taken when the gig is created.
/// Denormalized on purpose: it does not track later profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedBy {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub college: String,
    pub rating: f64,
    pub hustles_completed: u32,
    pub verified: bool,
    pub avatar: String,
}

impl PostedBy {
    pub fn snapshot_of(user: &User) -> Self {
        PostedBy {
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
            year: user.year.clone(),
            college: user.college.clone(),
            rating: user.rating,
            hustles_completed: user.gigs_completed,
            verified: false,
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub budget: i64,
    pub deadline: String,
    pub skills: Vec<String>,
    pub posted_by: PostedBy,
    pub status: GigStatus,
    pub date_posted: String,
    pub location: String,
    pub location_type: LocationType,
    pub meetup_details: String,
    #[serde(rename = "whatINeedHelp")]
    pub what_i_need_help: Vec<String>,
    pub applicants: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gig() -> Gig {
        Gig {
            id: "g1".into(),
            title: "Test".into(),
            description: "".into(),
            category: Category::Code,
            budget: 500,
            deadline: "2026-03-01".into(),
            skills: vec![],
            posted_by: PostedBy {
                name: "A".into(),
                email: "a@x.edu".into(),
                department: "CS".into(),
                year: "2nd Year".into(),
                college: "X".into(),
                rating: 0.0,
                hustles_completed: 0,
                verified: false,
                avatar: "".into(),
            },
            status: GigStatus::InProgress,
            date_posted: "2026-02-20".into(),
            location: "Remote".into(),
            location_type: LocationType::OnCampus,
            meetup_details: "".into(),
            what_i_need_help: vec!["one".into()],
            applicants: 3,
        }
    }

    #[test]
    fn test_gig_json_uses_camel_case_wire_names() {
        let gig = sample_gig();
        let json = serde_json::to_string(&gig).unwrap();
        assert!(json.contains("\"postedBy\""));
        assert!(json.contains("\"datePosted\""));
        assert!(json.contains("\"whatINeedHelp\""));
        assert!(json.contains("\"In Progress\""));
        assert!(json.contains("\"On Campus\""));
        assert!(json.contains("\"hustlesCompleted\""));

        let back: Gig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gig);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Poster".parse::<Role>().unwrap(), Role::Poster);
        assert_eq!("both".parse::<Role>().unwrap(), Role::Both);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("code".parse::<Category>().unwrap(), Category::Code);
        assert_eq!("Others".parse::<Category>().unwrap(), Category::Others);
        assert!("music".parse::<Category>().is_err());
    }
}
