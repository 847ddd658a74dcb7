//! Notifications for mutations of the master collection.
//!
//! Handlers describe what happened ("3 records deleted") as a
//! [`Notification`]; the controller forwards them to a
//! [`NotificationSink`]. Notifications are a side channel and never change
//! control flow.

use std::collections::VecDeque;
use std::fmt;

/// Kind of notification, mirroring the usual toast styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A human-readable event description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// "1 record deleted" / "N records deleted".
    pub fn deleted(count: usize) -> Self {
        Self::success(format!("{} deleted", records_phrase(count)))
    }

    /// "Loaded N records".
    pub fn loaded(count: usize) -> Self {
        Self::info(format!("Loaded {}", records_phrase(count)))
    }

    pub fn updated() -> Self {
        Self::success("Record updated")
    }

    /// "Dropped N duplicate records" when a load carried repeated ids.
    pub fn duplicates(count: usize) -> Self {
        let noun = if count == 1 { "record" } else { "records" };
        Self::warning(format!("Dropped {count} duplicate {noun}"))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.message)
    }
}

/// "1 record" / "N records".
fn records_phrase(count: usize) -> String {
    if count == 1 {
        "1 record".to_string()
    } else {
        format!("{count} records")
    }
}

/// Receiver of notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Buffers notifications until the rendering layer drains them.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything received so far, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }
}

/// Writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::error!("{}", notification.message),
            NotificationKind::Warning => tracing::warn!("{}", notification.message),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!("{}", notification.message);
            }
        }
    }
}
