//! Selection tracker.
//!
//! Holds the ids marked for bulk action. "Select all" is scoped to the rows
//! currently visible: it never adds or removes ids outside the window it was
//! given.

use std::collections::BTreeSet;

use crate::model::RecordId;

/// State of the header "select all" checkbox for the visible rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectAllState {
    /// No visible row is selected (or nothing is visible).
    #[default]
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    /// Every visible row is selected.
    Checked,
}

/// Set of selected record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &RecordId) {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
    }

    /// Add (`checked`) or remove every id in `visible`, leaving all other ids alone.
    pub fn select_all_visible<'a, I>(&mut self, visible: I, checked: bool)
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        for id in visible {
            if checked {
                self.ids.insert(id.clone());
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// True iff `visible` is non-empty and every id in it is selected.
    pub fn is_all_visible_selected(&self, visible: &[&RecordId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(*id))
    }

    /// Tri-state of the header checkbox for `visible`.
    pub fn header_state(&self, visible: &[&RecordId]) -> SelectAllState {
        let selected = visible.iter().filter(|id| self.ids.contains(**id)).count();
        if selected == 0 {
            SelectAllState::Unchecked
        } else if selected == visible.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Drop `id` if present.
    pub fn remove(&mut self, id: &RecordId) {
        self.ids.remove(id);
    }

    /// Keep only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}
