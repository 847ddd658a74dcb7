//! View state - the explicit state owned by the controller.
//!
//! # Architecture
//!
//! All mutable state lives in one [`ViewState`]:
//! - the master collection ([`RecordStore`])
//! - the compiled search query
//! - pagination
//! - the selection set
//! - the edit session (edit mode set + drafts)
//!
//! The filtered view and the visible page are never stored. They are derived
//! from the store and the query on every read, so no mutation can leave them
//! stale. The only derived value that must be written back is the current
//! page, which [`ViewState::reconcile`] re-clamps after any change that can
//! shrink the active view.

use tracing::debug;

use crate::config::ViewConfig;
use crate::edit::EditSession;
use crate::filter::{SearchQuery, filter};
use crate::model::{Record, RecordId};
use crate::notify::Notification;
use crate::pagination::{PageInfo, Pagination};
use crate::selection::{SelectAllState, Selection};
use crate::store::RecordStore;

// =============================================================================
// LOAD STATUS
// =============================================================================

/// Progress of the initial fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The last fetch delivered records.
    Loaded,
    /// The last fetch failed; the collection is empty.
    Failed(String),
}

// =============================================================================
// DENSITY
// =============================================================================

/// Rendering density chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
}

impl Density {
    /// Compact at or below `breakpoint`, comfortable above it.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Compact
        } else {
            Self::Comfortable
        }
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// All state of one record view session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub(crate) store: RecordStore,
    pub(crate) query: SearchQuery,
    pub(crate) pagination: Pagination,
    pub(crate) selection: Selection,
    pub(crate) edits: EditSession,
    pub(crate) load_status: LoadStatus,
    pub(crate) viewport_width: Option<u32>,
    pub(crate) config: ViewConfig,
    pub(crate) outbox: Vec<Notification>,
}

impl ViewState {
    /// Empty state using the given configuration.
    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            pagination: Pagination::new(config.initial_row_limit()),
            config,
            ..Self::default()
        }
    }

    // =========================================================================
    // Read-only access
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn edits(&self) -> &EditSession {
        &self.edits
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// The master collection when no search is active, otherwise the filtered view.
    pub fn active_view(&self) -> Vec<&Record> {
        filter(self.store.records(), &self.query)
    }

    /// Length of the active view.
    pub fn active_len(&self) -> usize {
        if self.query.is_empty() {
            self.store.len()
        } else {
            self.store
                .records()
                .iter()
                .filter(|record| self.query.matches(record))
                .count()
        }
    }

    /// Records on the current page of the active view.
    pub fn visible_records(&self) -> Vec<&Record> {
        let view = self.active_view();
        let bounds = self.pagination.bounds(view.len());
        view[bounds].to_vec()
    }

    /// Ids on the current page of the active view.
    pub fn visible_ids(&self) -> Vec<&RecordId> {
        self.visible_records()
            .into_iter()
            .map(|record| &record.id)
            .collect()
    }

    /// Header checkbox state for the current page.
    pub fn select_all_state(&self) -> SelectAllState {
        self.selection.header_state(&self.visible_ids())
    }

    pub fn page_info(&self) -> PageInfo {
        self.pagination.info(self.active_len())
    }

    /// Density for the last reported viewport width.
    pub fn density(&self) -> Density {
        self.viewport_width
            .map(|width| Density::for_width(width, self.config.compact_breakpoint))
            .unwrap_or_default()
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Restore every invariant after the master collection changed.
    ///
    /// Order matters: prune ids that no longer exist, then re-clamp the page
    /// against the (re-derived) active view.
    pub(crate) fn reconcile(&mut self) {
        let store = &self.store;
        let selected_before = self.selection.len();
        let edits_before = self.edits.len();
        self.selection.retain(|id| store.contains(id));
        self.edits.retain(|id| store.contains(id));

        let pruned_selection = selected_before - self.selection.len();
        let pruned_edits = edits_before - self.edits.len();
        if pruned_selection > 0 || pruned_edits > 0 {
            debug!(pruned_selection, pruned_edits, "Pruned ids missing from store");
        }

        self.clamp_page();
    }

    /// Re-clamp the current page against the active view.
    pub(crate) fn clamp_page(&mut self) {
        let len = self.active_len();
        self.pagination.clamp(len);
    }

    /// Queue a notification for the sink.
    pub(crate) fn notify(&mut self, notification: Notification) {
        self.outbox.push(notification);
    }
}
