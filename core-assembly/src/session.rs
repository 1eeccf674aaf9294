//! Per-run assembly state: title deduplication and id allocation

use core_model::CatalogSnapshot;
use std::collections::HashSet;

/// First record id handed out when assembling from scratch.
pub const DEFAULT_ID_ORIGIN: u64 = 1001;

/// Mutable state threaded through one merge pass.
///
/// Deduplication is deliberately exact-string on the title: "Dune" and
/// "dune" are different titles and both are admitted. Ids are strictly
/// increasing in acceptance order and are never reused, even across runs
/// that extend a prior snapshot.
#[derive(Debug)]
pub struct AssemblySession {
    seen_titles: HashSet<String>,
    next_id: u64,
}

impl AssemblySession {
    pub fn new(id_origin: u64) -> Self {
        Self {
            seen_titles: HashSet::new(),
            next_id: id_origin,
        }
    }

    /// Seed the session from an existing snapshot: its titles block
    /// duplicates, and allocation continues above its highest id.
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        let seen_titles = snapshot.books.iter().map(|b| b.title.clone()).collect();
        let next_id = match snapshot.max_record_id() {
            0 => DEFAULT_ID_ORIGIN,
            max => max + 1,
        };
        Self {
            seen_titles,
            next_id,
        }
    }

    /// Admit a title, or reject it as a duplicate. Admitted titles are
    /// recorded immediately.
    pub fn accept_title(&mut self, title: &str) -> bool {
        self.seen_titles.insert(title.to_string())
    }

    /// Hand out the next record id.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::{CatalogRecord, MediaType, Provenance};

    fn record(id: u64, title: &str) -> CatalogRecord {
        CatalogRecord {
            id,
            title: title.to_string(),
            author: "Unknown Author".to_string(),
            identifier: format!("ISBN-{:04}", id),
            category: "Novel - Fiction".to_string(),
            media_type: MediaType::Novel,
            copies: 1,
            available_copies: 1,
            cover_image: format!("https://picsum.photos/seed/novel-{}/400/600", id),
            download_links: None,
            provenance: Provenance {
                source: "curated-classics".to_string(),
                source_id: id.to_string(),
            },
        }
    }

    #[test]
    fn test_exact_duplicate_rejected_once_seen() {
        let mut session = AssemblySession::new(DEFAULT_ID_ORIGIN);
        assert!(session.accept_title("Dune"));
        assert!(!session.accept_title("Dune"));
    }

    #[test]
    fn test_near_duplicates_are_distinct_titles() {
        let mut session = AssemblySession::new(DEFAULT_ID_ORIGIN);
        assert!(session.accept_title("Dune"));
        assert!(session.accept_title("dune"));
        assert!(session.accept_title("Dune "));
    }

    #[test]
    fn test_ids_strictly_increase_from_origin() {
        let mut session = AssemblySession::new(DEFAULT_ID_ORIGIN);
        assert_eq!(session.allocate_id(), 1001);
        assert_eq!(session.allocate_id(), 1002);
        assert_eq!(session.allocate_id(), 1003);
    }

    #[test]
    fn test_snapshot_seeding_resumes_above_max_id() {
        let snapshot = CatalogSnapshot {
            books: vec![record(1001, "A"), record(1057, "B")],
            users: vec![],
        };
        let mut session = AssemblySession::from_snapshot(&snapshot);
        assert_eq!(session.allocate_id(), 1058);
        assert!(!session.accept_title("A"));
        assert!(session.accept_title("C"));
    }

    #[test]
    fn test_empty_snapshot_seeds_default_origin() {
        let mut session = AssemblySession::from_snapshot(&CatalogSnapshot::new());
        assert_eq!(session.allocate_id(), DEFAULT_ID_ORIGIN);
    }
}
