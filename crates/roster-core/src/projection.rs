//! Read-only projections for the rendering layer.
//!
//! A [`TableView`] is everything a renderer needs for one frame: the rows of
//! the current page with their selection and edit flags, the header checkbox
//! state, page position and density.

use std::num::NonZeroUsize;

use crate::model::{Record, RecordDraft, RecordField};
use crate::pagination::PageInfo;
use crate::selection::SelectAllState;
use crate::state::{Density, LoadStatus, ViewState};

/// One visible row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub record: &'a Record,
    pub selected: bool,
    /// Present while the row is in edit mode.
    pub draft: Option<&'a RecordDraft>,
}

impl RowView<'_> {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Value to show in a cell: the draft while editing, the committed value otherwise.
    pub fn cell(&self, field: RecordField) -> &str {
        match self.draft {
            Some(draft) => draft.field(field),
            None => self.record.field(field),
        }
    }
}

/// Snapshot of the table for one render.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub rows: Vec<RowView<'a>>,
    pub select_all: SelectAllState,
    pub page: PageInfo,
    pub row_limit: NonZeroUsize,
    pub row_limit_options: Vec<NonZeroUsize>,
    pub selected_count: usize,
    pub query: &'a str,
    pub density: Density,
    pub load_status: &'a LoadStatus,
}

impl<'a> TableView<'a> {
    /// Build the projection of `state`.
    pub fn of(state: &'a ViewState) -> Self {
        let rows = state
            .visible_records()
            .into_iter()
            .map(|record| RowView {
                record,
                selected: state.selection().contains(&record.id),
                draft: state.edits().draft(&record.id),
            })
            .collect();

        Self {
            rows,
            select_all: state.select_all_state(),
            page: state.page_info(),
            row_limit: state.pagination().row_limit(),
            row_limit_options: state.config().row_limit_options(),
            selected_count: state.selection().len(),
            query: state.query().text(),
            density: state.density(),
            load_status: state.load_status(),
        }
    }
}
