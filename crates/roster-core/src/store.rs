//! Record store - owner of the master collection.
//!
//! The store is the single source of truth. Every other view (search
//! results, the visible page, selection and edit sets) is derived from it or
//! pruned against it by the controller.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::{Record, RecordDraft, RecordId};
use crate::selection::Selection;

/// Outcome of replacing the master collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records kept.
    pub accepted: usize,
    /// Ids that appeared more than once; only the first occurrence was kept.
    pub duplicates: Vec<RecordId>,
}

/// Ordered, in-memory master collection of records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    ///
    /// Insertion order is preserved. Records whose id was already seen are
    /// dropped so that lookups by id are unambiguous.
    pub fn load(&mut self, records: Vec<Record>) -> LoadReport {
        let mut seen = HashSet::with_capacity(records.len());
        let mut duplicates = Vec::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if seen.contains(&record.id) {
                duplicates.push(record.id);
                continue;
            }
            seen.insert(record.id.clone());
            kept.push(record);
        }

        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                "Dropped records with duplicate ids during load"
            );
        }

        self.records = kept;
        LoadReport {
            accepted: self.records.len(),
            duplicates,
        }
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Remove the record with the given id, returning it if it existed.
    pub fn delete_by_id(&mut self, id: &RecordId) -> Option<Record> {
        let Some(index) = self.position(id) else {
            debug!(%id, "Delete ignored, record not found");
            return None;
        };
        Some(self.records.remove(index))
    }

    /// Remove every record whose id is selected. Returns how many were removed.
    pub fn delete_where_selected(&mut self, selection: &Selection) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !selection.contains(&record.id));
        before - self.records.len()
    }

    /// Apply a draft onto the matching record in place.
    ///
    /// Returns `false` when no record has this id.
    pub fn update_fields(&mut self, id: &RecordId, draft: &RecordDraft) -> bool {
        match self.records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.apply(draft);
                true
            }
            None => {
                debug!(%id, "Update ignored, record not found");
                false
            }
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Check whether a record with this id exists.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Ids of all records in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.records.iter().map(|record| &record.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: u64) -> Vec<Record> {
        (1..=count)
            .map(|n| {
                Record::new(
                    n,
                    format!("User {n}"),
                    format!("user{n}@mailinator.com"),
                    "member",
                )
            })
            .collect()
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut store = RecordStore::new();
        store.load(sample(5));
        let report = store.load(sample(2));

        assert_eq!(report.accepted, 2);
        assert!(report.duplicates.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_keeps_first_duplicate() {
        let mut store = RecordStore::new();
        let mut records = sample(3);
        records.push(Record::new("2", "Impostor", "x@mailinator.com", "admin"));

        let report = store.load(records);

        assert_eq!(report.accepted, 3);
        assert_eq!(report.duplicates, vec![RecordId::from("2")]);
        assert_eq!(store.get(&RecordId::from("2")).unwrap().name, "User 2");
    }

    #[test]
    fn test_delete_by_id_is_idempotent() {
        let mut store = RecordStore::new();
        store.load(sample(4));
        let id = RecordId::from("3");

        assert!(store.delete_by_id(&id).is_some());
        assert!(store.delete_by_id(&id).is_none());
        assert_eq!(store.len(), 3);
        let ids: Vec<&str> = store.ids().map(RecordId::as_str).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_delete_where_selected() {
        let mut store = RecordStore::new();
        store.load(sample(15));
        let mut selection = Selection::new();
        for id in ["1", "3", "5", "99"] {
            selection.toggle(&RecordId::from(id));
        }

        let removed = store.delete_where_selected(&selection);

        assert_eq!(removed, 3);
        assert_eq!(store.len(), 12);
        assert!(store.ids().all(|id| !selection.contains(id) || id.as_str() == "99"));
    }

    #[test]
    fn test_update_fields_missing_id() {
        let mut store = RecordStore::new();
        store.load(sample(1));
        let draft = RecordDraft {
            name: "Ghost".to_string(),
            email: "ghost@mailinator.com".to_string(),
            role: "admin".to_string(),
        };

        assert!(!store.update_fields(&RecordId::from("42"), &draft));
        assert!(store.update_fields(&RecordId::from("1"), &draft));
        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Ghost");
    }
}
