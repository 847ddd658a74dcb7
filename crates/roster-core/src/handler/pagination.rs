//! Pagination handler.
//!
//! Page and row-limit changes never touch the collection, so only the
//! current page needs re-clamping.

use std::num::NonZeroUsize;

use tracing::warn;

use crate::message::PaginationMessage;
use crate::state::ViewState;

use super::MessageHandler;

/// Handler for pagination control messages.
pub struct PaginationHandler;

impl MessageHandler<PaginationMessage> for PaginationHandler {
    fn handle(&self, state: &mut ViewState, msg: PaginationMessage) {
        let len = state.active_len();
        let pagination = &mut state.pagination;
        match msg {
            PaginationMessage::GoToPage(page) => pagination.set_page(page, len),
            PaginationMessage::NextPage => pagination.next_page(len),
            PaginationMessage::PreviousPage => pagination.prev_page(len),
            PaginationMessage::FirstPage => pagination.first_page(len),
            PaginationMessage::LastPage => pagination.last_page(len),
            PaginationMessage::RowLimitChanged(rows) => match NonZeroUsize::new(rows) {
                Some(rows) => pagination.set_row_limit(rows, len),
                None => warn!("Ignoring row limit of zero"),
            },
        }
    }
}
