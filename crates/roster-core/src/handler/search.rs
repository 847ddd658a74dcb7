//! Search handler.

use tracing::debug;

use crate::filter::SearchQuery;
use crate::message::SearchMessage;
use crate::state::ViewState;

use super::MessageHandler;

/// Handler for search bar messages.
pub struct SearchHandler;

impl MessageHandler<SearchMessage> for SearchHandler {
    fn handle(&self, state: &mut ViewState, msg: SearchMessage) {
        let text = match msg {
            SearchMessage::Changed(text) => text,
            SearchMessage::Cleared => String::new(),
        };
        if text == state.query.text() {
            return;
        }

        state.query = SearchQuery::new(text);
        state.clamp_page();
        debug!(
            query = state.query.text(),
            matches = state.active_len(),
            "Search updated"
        );
    }
}
