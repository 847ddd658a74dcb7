//! Roster core - in-memory record view controller.
//!
//! Holds a small collection of user records loaded once from a remote source
//! and keeps the derived views consistent while an operator searches,
//! paginates, selects, edits and deletes:
//!
//! - **Record store**: the master collection ([`RecordStore`])
//! - **Search**: OR-across-fields, case-insensitive pattern filter ([`SearchQuery`])
//! - **Pagination**: clamped 1-based page window ([`Pagination`])
//! - **Selection**: selected ids with page-scoped select-all ([`Selection`])
//! - **Edits**: per-record drafts ([`EditSession`])
//! - **Controller**: message dispatch and reconciliation ([`Controller`])
//!
//! The crate performs no I/O. Loading is done elsewhere and delivered as a
//! [`Message::Load`].

pub mod config;
pub mod controller;
pub mod edit;
pub mod error;
pub mod filter;
pub mod handler;
pub mod message;
pub mod model;
pub mod notify;
pub mod pagination;
pub mod projection;
pub mod selection;
pub mod state;
pub mod store;

pub use config::ViewConfig;
pub use controller::Controller;
pub use edit::EditSession;
pub use error::{LoadError, ParseFieldError};
pub use filter::{SearchQuery, filter};
pub use message::{
    DeleteMessage, EditMessage, LoadMessage, Message, PaginationMessage, SearchMessage,
    SelectionMessage,
};
pub use model::{Record, RecordDraft, RecordField, RecordId};
pub use notify::{Notification, NotificationKind, NotificationQueue, NotificationSink, TracingSink};
pub use pagination::{PageInfo, Pagination, page_count, window_bounds, window_of};
pub use projection::{RowView, TableView};
pub use selection::{SelectAllState, Selection};
pub use state::{Density, LoadStatus, ViewState};
pub use store::{LoadReport, RecordStore};
