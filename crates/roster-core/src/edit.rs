//! Edit session manager.
//!
//! A record is either `Normal` or `Editing`. A record is `Editing` exactly
//! when a draft exists for it: the set of records in edit mode is the key set
//! of the draft map, so the two can never disagree.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{Record, RecordDraft, RecordField, RecordId};

/// Drafts for every record currently open for editing.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    drafts: BTreeMap<RecordId, RecordDraft>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `record` for editing with a draft seeded from its committed values.
    ///
    /// A record already in edit mode keeps its existing draft.
    pub fn enter(&mut self, record: &Record) {
        self.drafts
            .entry(record.id.clone())
            .or_insert_with(|| RecordDraft::from_record(record));
    }

    /// Change one field of an open draft. Returns `false` if `id` is not being edited.
    pub fn update_draft(&mut self, id: &RecordId, field: RecordField, value: String) -> bool {
        match self.drafts.get_mut(id) {
            Some(draft) => {
                draft.set(field, value);
                true
            }
            None => {
                debug!(%id, ?field, "Draft change ignored, record not in edit mode");
                false
            }
        }
    }

    /// Leave edit mode for `id`, handing back its draft.
    pub fn take(&mut self, id: &RecordId) -> Option<RecordDraft> {
        self.drafts.remove(id)
    }

    /// Drop the draft for `id` if there is one.
    pub fn prune(&mut self, id: &RecordId) {
        self.drafts.remove(id);
    }

    /// Keep only drafts whose id satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) {
        self.drafts.retain(|id, _| keep(id));
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn draft(&self, id: &RecordId) -> Option<&RecordDraft> {
        self.drafts.get(id)
    }

    /// Ids in edit mode, sorted.
    pub fn editing_ids(&self) -> impl Iterator<Item = &RecordId> {
        self.drafts.keys()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new("3", "Arvind Kumar", "arvind@mailinator.com", "admin")
    }

    #[test]
    fn test_enter_seeds_draft() {
        let mut session = EditSession::new();
        let record = record();
        session.enter(&record);

        assert!(session.is_editing(&record.id));
        assert_eq!(session.draft(&record.id), Some(&RecordDraft::from_record(&record)));
    }

    #[test]
    fn test_reenter_keeps_draft() {
        let mut session = EditSession::new();
        let record = record();
        session.enter(&record);
        session.update_draft(&record.id, RecordField::Name, "New Name".to_string());
        session.enter(&record);

        assert_eq!(session.draft(&record.id).unwrap().name, "New Name");
    }

    #[test]
    fn test_update_requires_edit_mode() {
        let mut session = EditSession::new();
        let id = RecordId::from("3");
        assert!(!session.update_draft(&id, RecordField::Role, "member".to_string()));
        assert!(session.is_empty());
    }

    #[test]
    fn test_take_leaves_edit_mode() {
        let mut session = EditSession::new();
        let record = record();
        session.enter(&record);

        assert!(session.take(&record.id).is_some());
        assert!(!session.is_editing(&record.id));
        assert!(session.take(&record.id).is_none());
    }
}
