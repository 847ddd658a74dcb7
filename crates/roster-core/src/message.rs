//! Message hierarchy for the record view.
//!
//! Every user action and every completed load is represented as a
//! [`Message`]. The controller processes one message at a time; all state
//! changes happen while handling a message.

use crate::error::LoadError;
use crate::model::{Record, RecordField, RecordId};

/// Root message enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // =========================================================================
    // Loading
    // =========================================================================
    /// Fetch lifecycle.
    Load(LoadMessage),

    // =========================================================================
    // Search
    // =========================================================================
    /// Search bar input.
    Search(SearchMessage),

    // =========================================================================
    // View-area messages
    // =========================================================================
    /// Page navigation and row limit.
    Pagination(PaginationMessage),

    /// Row checkboxes and the header checkbox.
    Selection(SelectionMessage),

    /// Inline editing.
    Edit(EditMessage),

    /// Single and bulk deletion.
    Delete(DeleteMessage),

    // =========================================================================
    // Ambient
    // =========================================================================
    /// The viewport width changed (pixels). Affects density only.
    ViewportResized(u32),
}

// =============================================================================
// LOAD
// =============================================================================

/// Messages from the load source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMessage {
    /// A fetch was started. The master collection keeps its prior contents.
    Requested,

    /// The fetch finished, successfully or not.
    Finished(Result<Vec<Record>, LoadError>),
}

// =============================================================================
// SEARCH
// =============================================================================

/// Messages from the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    /// Search text changed (the empty string matches everything)
    Changed(String),

    /// Clear search
    Cleared,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Messages from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMessage {
    /// Go to a specific page (1-based)
    GoToPage(usize),

    /// Go to the next page
    NextPage,

    /// Go to the previous page
    PreviousPage,

    /// Go to the first page
    FirstPage,

    /// Go to the last page
    LastPage,

    /// Change rows per page
    RowLimitChanged(usize),
}

// =============================================================================
// SELECTION
// =============================================================================

/// Messages from the selection checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMessage {
    /// A row checkbox was clicked
    CheckboxClicked(RecordId),

    /// The header checkbox was clicked; `checked` is its new value
    SelectAllClicked { checked: bool },
}

// =============================================================================
// EDIT
// =============================================================================

/// Messages from inline editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMessage {
    /// The edit button was pressed: enters edit mode, or commits when already editing
    Toggled(RecordId),

    /// A draft input changed
    DraftChanged {
        id: RecordId,
        field: RecordField,
        value: String,
    },

    /// Leave edit mode without saving the draft
    Discarded(RecordId),
}

// =============================================================================
// DELETE
// =============================================================================

/// Messages from the delete buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteMessage {
    /// The delete button of one row was pressed
    Row(RecordId),

    /// "Delete selected" was pressed
    Selected,
}

impl Message {
    /// Convenience constructor for a completed fetch.
    pub fn loaded(result: Result<Vec<Record>, LoadError>) -> Self {
        Self::Load(LoadMessage::Finished(result))
    }

    /// Convenience constructor for a search text change.
    pub fn search(text: impl Into<String>) -> Self {
        Self::Search(SearchMessage::Changed(text.into()))
    }

    /// Convenience constructor for a row checkbox click.
    pub fn toggle(id: impl Into<RecordId>) -> Self {
        Self::Selection(SelectionMessage::CheckboxClicked(id.into()))
    }

    /// Convenience constructor for the edit button.
    pub fn toggle_edit(id: impl Into<RecordId>) -> Self {
        Self::Edit(EditMessage::Toggled(id.into()))
    }

    /// Convenience constructor for a draft change.
    pub fn draft(id: impl Into<RecordId>, field: RecordField, value: impl Into<String>) -> Self {
        Self::Edit(EditMessage::DraftChanged {
            id: id.into(),
            field,
            value: value.into(),
        })
    }

    /// Convenience constructor for a row delete.
    pub fn delete(id: impl Into<RecordId>) -> Self {
        Self::Delete(DeleteMessage::Row(id.into()))
    }
}
