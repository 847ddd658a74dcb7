//! Edit handler.
//!
//! # State machine
//!
//! ```text
//! Normal --Toggled--> Editing        (draft seeded from the committed record)
//! Editing --DraftChanged--> Editing  (draft only, store untouched)
//! Editing --Toggled--> Normal        (draft committed to the store)
//! Editing --Discarded--> Normal      (draft dropped)
//! ```
//!
//! Committing a draft whose record was deleted in the meantime only cleans
//! up the draft.

use tracing::{debug, info};

use crate::message::EditMessage;
use crate::model::RecordId;
use crate::notify::Notification;
use crate::state::ViewState;

use super::MessageHandler;

/// Handler for inline editing messages.
pub struct EditHandler;

impl MessageHandler<EditMessage> for EditHandler {
    fn handle(&self, state: &mut ViewState, msg: EditMessage) {
        match msg {
            EditMessage::Toggled(id) => {
                if state.edits.is_editing(&id) {
                    commit(state, &id);
                } else {
                    enter(state, &id);
                }
            }
            EditMessage::DraftChanged { id, field, value } => {
                state.edits.update_draft(&id, field, value);
            }
            EditMessage::Discarded(id) => {
                if state.edits.take(&id).is_some() {
                    debug!(%id, "Draft discarded");
                }
            }
        }
    }
}

fn enter(state: &mut ViewState, id: &RecordId) {
    match state.store.get(id) {
        Some(record) => {
            state.edits.enter(record);
            debug!(%id, "Edit started");
        }
        None => debug!(%id, "Edit ignored, record not found"),
    }
}

fn commit(state: &mut ViewState, id: &RecordId) {
    let Some(draft) = state.edits.take(id) else {
        return;
    };
    if state.store.update_fields(id, &draft) {
        info!(%id, "Record updated");
        state.notify(Notification::updated());
        // The edited fields may no longer match the active search.
        state.clamp_page();
    }
}
