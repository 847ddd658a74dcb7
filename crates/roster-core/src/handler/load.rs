//! Load handler.
//!
//! A successful load replaces the master collection; a failed load empties
//! it. Either way the rest of the state is reconciled against the new
//! collection.

use tracing::{info, warn};

use crate::message::LoadMessage;
use crate::notify::Notification;
use crate::state::{LoadStatus, ViewState};

use super::MessageHandler;

/// Handler for load messages.
pub struct LoadHandler;

impl MessageHandler<LoadMessage> for LoadHandler {
    fn handle(&self, state: &mut ViewState, msg: LoadMessage) {
        match msg {
            LoadMessage::Requested => {
                info!("Loading records");
                state.load_status = LoadStatus::Loading;
            }
            LoadMessage::Finished(Ok(records)) => {
                let report = state.store.load(records);
                info!(records = report.accepted, "Records loaded");
                state.load_status = LoadStatus::Loaded;
                state.notify(Notification::loaded(report.accepted));
                if !report.duplicates.is_empty() {
                    state.notify(Notification::duplicates(report.duplicates.len()));
                }
                state.reconcile();
            }
            LoadMessage::Finished(Err(error)) => {
                warn!(%error, "Failed to load records");
                state.store.clear();
                state.load_status = LoadStatus::Failed(error.to_string());
                state.notify(Notification::error(format!(
                    "Failed to load records: {}",
                    error.user_message()
                )));
                state.reconcile();
            }
        }
    }
}
