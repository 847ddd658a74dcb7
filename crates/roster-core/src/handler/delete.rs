//! Delete handler.

use tracing::info;

use crate::message::DeleteMessage;
use crate::notify::Notification;
use crate::state::ViewState;

use super::MessageHandler;

/// Handler for row and bulk delete messages.
pub struct DeleteHandler;

impl MessageHandler<DeleteMessage> for DeleteHandler {
    fn handle(&self, state: &mut ViewState, msg: DeleteMessage) {
        match msg {
            DeleteMessage::Row(id) => {
                // Prune even when the record is already gone; both are idempotent.
                let removed = state.store.delete_by_id(&id);
                state.selection.remove(&id);
                state.edits.prune(&id);
                if removed.is_some() {
                    info!(%id, "Record deleted");
                    state.notify(Notification::deleted(1));
                }
                state.reconcile();
            }
            DeleteMessage::Selected => {
                let removed = state.store.delete_where_selected(&state.selection);
                state.selection.clear();
                if removed > 0 {
                    info!(removed, "Selected records deleted");
                    state.notify(Notification::deleted(removed));
                }
                state.reconcile();
            }
        }
    }
}
