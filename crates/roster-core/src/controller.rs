//! Controller - dispatches messages and owns the view state.
//!
//! The architecture follows the Elm pattern: State -> Message -> Update ->
//! View. All state changes happen in [`Controller::update`]; renderers only
//! read [`Controller::table`] and the accessors on [`ViewState`].
//!
//! # Example
//!
//! ```
//! use roster_core::{Controller, Message, Record};
//!
//! let mut controller = Controller::new();
//! controller.update(Message::loaded(Ok(vec![
//!     Record::new("1", "Arvind", "a@x.com", "admin"),
//!     Record::new("2", "Sarah", "s@x.com", "member"),
//! ])));
//! controller.update(Message::search("admin"));
//!
//! let table = controller.table();
//! assert_eq!(table.rows.len(), 1);
//! assert_eq!(table.rows[0].record.name, "Arvind");
//! ```

use tracing::trace;

use crate::config::ViewConfig;
use crate::handler::{
    DeleteHandler, EditHandler, LoadHandler, MessageHandler, PaginationHandler, SearchHandler,
    SelectionHandler,
};
use crate::message::Message;
use crate::notify::{NotificationQueue, NotificationSink};
use crate::projection::TableView;
use crate::state::ViewState;

/// Owner of the view state and the notification sink.
#[derive(Debug)]
pub struct Controller<S = NotificationQueue> {
    state: ViewState,
    sink: S,
}

impl Default for Controller<NotificationQueue> {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller<NotificationQueue> {
    /// Controller with default configuration that buffers notifications.
    pub fn new() -> Self {
        Self::with_sink(ViewConfig::default(), NotificationQueue::new())
    }

    /// Remove and return the notifications raised so far.
    pub fn drain_notifications(&mut self) -> Vec<crate::notify::Notification> {
        self.sink.drain()
    }
}

impl<S: NotificationSink> Controller<S> {
    /// Controller with explicit configuration and notification sink.
    pub fn with_sink(config: ViewConfig, sink: S) -> Self {
        Self {
            state: ViewState::with_config(config),
            sink,
        }
    }

    /// Process one message.
    pub fn update(&mut self, message: Message) {
        trace!(?message, "Handling message");
        match message {
            Message::Load(msg) => LoadHandler.handle(&mut self.state, msg),
            Message::Search(msg) => SearchHandler.handle(&mut self.state, msg),
            Message::Pagination(msg) => PaginationHandler.handle(&mut self.state, msg),
            Message::Selection(msg) => SelectionHandler.handle(&mut self.state, msg),
            Message::Edit(msg) => EditHandler.handle(&mut self.state, msg),
            Message::Delete(msg) => DeleteHandler.handle(&mut self.state, msg),
            Message::ViewportResized(width) => self.state.viewport_width = Some(width),
        }

        for notification in self.state.outbox.drain(..) {
            self.sink.notify(notification);
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Projection of the current page for rendering.
    pub fn table(&self) -> TableView<'_> {
        TableView::of(&self.state)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
