//! Message handlers.
//!
//! Each handler owns the logic for one message category and operates on the
//! explicit [`ViewState`]. The controller dispatches to them:
//!
//! ```ignore
//! match message {
//!     Message::Selection(msg) => SelectionHandler.handle(&mut self.state, msg),
//!     Message::Edit(msg) => EditHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```
//!
//! Handlers that change the master collection finish with
//! `state.reconcile()` so selection, drafts and pagination stay consistent.

mod delete;
mod edit;
mod load;
mod pagination;
mod search;
mod selection;

use crate::state::ViewState;

pub use delete::DeleteHandler;
pub use edit::EditHandler;
pub use load::LoadHandler;
pub use pagination::PaginationHandler;
pub use search::SearchHandler;
pub use selection::SelectionHandler;

/// Trait for handling one category of messages.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message by mutating state.
    ///
    /// Notifications are queued on the state and forwarded to the sink by
    /// the controller after the handler returns.
    fn handle(&self, state: &mut ViewState, msg: M);
}
