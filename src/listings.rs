use std::collections::HashMap;

use log::{debug, warn};

use crate::error::StoreResult;
use crate::models::{Category, Gig, GigStatus};
use crate::seed::seed_gigs;
use crate::storage::{GIGS_KEY, INCREMENTS_KEY, Storage};

/// Owns user-created gigs and the applicant-increment overlay. Reads always
/// present the seed catalog first, then persisted gigs in insertion order.
pub struct ListingStore<'a> {
    storage: &'a dyn Storage,
}

/// Browse filter: all criteria are linear scans over the combined catalog.
#[derive(Debug, Default)]
pub struct GigQuery {
    pub category: Option<Category>,
    pub search: Option<String>,
    pub open_only: bool,
}

impl<'a> ListingStore<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Seed catalog followed by persisted gigs. Never fails on malformed
    /// persisted data.
    pub fn list_gigs(&self) -> StoreResult<Vec<Gig>> {
        let mut gigs = seed_gigs();
        gigs.extend(self.stored_gigs()?);
        Ok(gigs)
    }

    pub fn find_gigs(&self, query: &GigQuery) -> StoreResult<Vec<Gig>> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let gigs = self
            .list_gigs()?
            .into_iter()
            .filter(|g| !query.open_only || g.status == GigStatus::Open)
            .filter(|g| query.category.is_none_or(|c| g.category == c))
            .filter(|g| {
                needle
                    .as_deref()
                    .is_none_or(|n| g.title.to_lowercase().contains(n))
            })
            .collect();
        Ok(gigs)
    }

    pub fn gigs_posted_by(&self, email: &str) -> StoreResult<Vec<Gig>> {
        let gigs = self
            .list_gigs()?
            .into_iter()
            .filter(|g| g.posted_by.email == email)
            .collect();
        Ok(gigs)
    }

    pub fn get_gig(&self, id: &str) -> StoreResult<Option<Gig>> {
        Ok(self.list_gigs()?.into_iter().find(|g| g.id == id))
    }

    /// Appends a fully-formed gig. The caller supplies the id; uniqueness is
    /// not checked here.
    pub fn add_gig(&self, gig: Gig) -> StoreResult<()> {
        let mut gigs = self.stored_gigs()?;
        debug!("adding gig {} ({})", gig.id, gig.title);
        gigs.push(gig);
        self.write_gigs(&gigs)
    }

    /// Persisted gigs are bumped in place; any other id (seed gigs included)
    /// goes through the overlay, which is created on first touch. Unknown
    /// ids therefore silently grow an overlay entry.
    pub fn increment_applicants(&self, gig_id: &str) -> StoreResult<()> {
        let mut gigs = self.stored_gigs()?;
        if let Some(gig) = gigs.iter_mut().find(|g| g.id == gig_id) {
            gig.applicants += 1;
            return self.write_gigs(&gigs);
        }

        let mut overlay = self.overlay()?;
        *overlay.entry(gig_id.to_string()).or_insert(0) += 1;
        let raw = serde_json::to_string(&overlay).map_err(anyhow::Error::from)?;
        self.storage.set(INCREMENTS_KEY, &raw)?;
        Ok(())
    }

    /// Base count baked into the record plus any overlay increments.
    pub fn effective_applicants(&self, gig: &Gig) -> StoreResult<u32> {
        let overlay = self.overlay()?;
        Ok(gig.applicants + overlay.get(&gig.id).copied().unwrap_or(0))
    }

    fn stored_gigs(&self) -> StoreResult<Vec<Gig>> {
        let gigs = match self.storage.get(GIGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("gig collection unreadable, treating as empty: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(gigs)
    }

    fn write_gigs(&self, gigs: &[Gig]) -> StoreResult<()> {
        let raw = serde_json::to_string(gigs).map_err(anyhow::Error::from)?;
        self.storage.set(GIGS_KEY, &raw)?;
        Ok(())
    }

    fn overlay(&self) -> StoreResult<HashMap<String, u32>> {
        let overlay = match self.storage.get(INCREMENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("increment overlay unreadable, treating as empty: {}", e);
                HashMap::new()
            }),
            None => HashMap::new(),
        };
        Ok(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationType, PostedBy};
    use crate::storage::MemoryStorage;

    fn sample_gig(id: &str, title: &str) -> Gig {
        Gig {
            id: id.into(),
            title: title.into(),
            description: "desc".into(),
            category: Category::Code,
            budget: 900,
            deadline: "2026-03-05".into(),
            skills: vec!["Rust".into()],
            posted_by: PostedBy {
                name: "Asha Verma".into(),
                email: "asha@x.edu".into(),
                department: "CS".into(),
                year: "2nd Year".into(),
                college: "IIT Delhi".into(),
                rating: 0.0,
                hustles_completed: 0,
                verified: false,
                avatar: "".into(),
            },
            status: GigStatus::Open,
            date_posted: "2026-02-20".into(),
            location: "Remote".into(),
            location_type: LocationType::Remote,
            meetup_details: "".into(),
            what_i_need_help: vec![],
            applicants: 0,
        }
    }

    #[test]
    fn test_empty_store_returns_seed_catalog_only() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        let gigs = store.list_gigs().unwrap();
        assert_eq!(gigs.len(), 6);
        assert_eq!(gigs[0].id, "1");
    }

    #[test]
    fn test_added_gig_appears_after_seed_catalog() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        store.add_gig(sample_gig("u1", "Rust tutoring")).unwrap();
        let gigs = store.list_gigs().unwrap();
        assert_eq!(gigs.len(), 7);
        assert_eq!(gigs.last().unwrap().id, "u1");
    }

    #[test]
    fn test_seed_gig_increments_accumulate_in_overlay() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        // seed gig "1" has a baked-in count of 7
        for _ in 0..3 {
            store.increment_applicants("1").unwrap();
        }
        let gig = store.get_gig("1").unwrap().unwrap();
        assert_eq!(gig.applicants, 7);
        assert_eq!(store.effective_applicants(&gig).unwrap(), 10);
    }

    #[test]
    fn test_persisted_gig_increments_in_place_without_overlay() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        store.add_gig(sample_gig("u1", "Rust tutoring")).unwrap();
        store.increment_applicants("u1").unwrap();

        let gig = store.get_gig("u1").unwrap().unwrap();
        assert_eq!(gig.applicants, 1);
        assert_eq!(storage.get(INCREMENTS_KEY).unwrap(), None);
        assert_eq!(store.effective_applicants(&gig).unwrap(), 1);
    }

    #[test]
    fn test_unknown_id_fabricates_overlay_entry() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        store.increment_applicants("no-such-gig").unwrap();
        let overlay: HashMap<String, u32> =
            serde_json::from_str(&storage.get(INCREMENTS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(overlay.get("no-such-gig"), Some(&1));
    }

    #[test]
    fn test_corrupt_overlay_reads_as_empty_and_recovers_on_write() {
        let storage = MemoryStorage::new();
        storage.set(INCREMENTS_KEY, "{\"1\": \"seven\"").unwrap();

        let store = ListingStore::new(&storage);
        let gig = store.get_gig("1").unwrap().unwrap();
        assert_eq!(store.effective_applicants(&gig).unwrap(), gig.applicants);

        // the next increment starts a fresh overlay over the corrupt block
        store.increment_applicants("1").unwrap();
        assert_eq!(store.effective_applicants(&gig).unwrap(), gig.applicants + 1);
    }

    #[test]
    fn test_corrupt_gig_block_reads_as_seed_only() {
        let storage = MemoryStorage::new();
        storage.set(GIGS_KEY, "[{\"id\": ").unwrap();

        let store = ListingStore::new(&storage);
        assert_eq!(store.list_gigs().unwrap().len(), 6);
    }

    #[test]
    fn test_find_gigs_filters() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        let mut closed = sample_gig("u1", "Closed Rust gig");
        closed.status = GigStatus::Closed;
        store.add_gig(closed).unwrap();
        store.add_gig(sample_gig("u2", "Open Rust gig")).unwrap();

        let open = store
            .find_gigs(&GigQuery {
                open_only: true,
                ..Default::default()
            })
            .unwrap();
        assert!(open.iter().all(|g| g.status == GigStatus::Open));
        assert!(open.iter().any(|g| g.id == "u2"));
        assert!(!open.iter().any(|g| g.id == "u1"));

        let design = store
            .find_gigs(&GigQuery {
                category: Some(Category::Design),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(design.len(), 2); // both seed Design gigs

        let searched = store
            .find_gigs(&GigQuery {
                search: Some("fintech".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, "1");
    }

    #[test]
    fn test_gigs_posted_by_matches_snapshot_email() {
        let storage = MemoryStorage::new();
        let store = ListingStore::new(&storage);

        store.add_gig(sample_gig("u1", "Rust tutoring")).unwrap();
        let mine = store.gigs_posted_by("asha@x.edu").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "u1");

        assert!(store.gigs_posted_by("nobody@x.edu").unwrap().is_empty());
    }
}
