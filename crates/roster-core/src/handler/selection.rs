//! Selection handler.

use tracing::debug;

use crate::message::SelectionMessage;
use crate::model::RecordId;
use crate::state::ViewState;

use super::MessageHandler;

/// Handler for row and header checkbox messages.
pub struct SelectionHandler;

impl MessageHandler<SelectionMessage> for SelectionHandler {
    fn handle(&self, state: &mut ViewState, msg: SelectionMessage) {
        match msg {
            SelectionMessage::CheckboxClicked(id) => {
                // A click can arrive after its row was deleted.
                if state.store.contains(&id) {
                    state.selection.toggle(&id);
                } else {
                    debug!(%id, "Checkbox ignored, record not found");
                }
            }
            SelectionMessage::SelectAllClicked { checked } => {
                let visible: Vec<RecordId> = state.visible_ids().into_iter().cloned().collect();
                state.selection.select_all_visible(&visible, checked);
            }
        }
    }
}
