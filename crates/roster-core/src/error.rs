//! Error types for the record view core.
//!
//! Almost nothing in the core can fail: mutations that target a missing id
//! are no-ops and malformed search patterns degrade to literal matching. The
//! errors that remain describe why a load produced no data, plus input
//! parsing failures raised by text surfaces.

use thiserror::Error;

/// Why a load from the record source failed.
///
/// Every variant is handled the same way by the controller: the master
/// collection becomes empty. The variants exist so the failure can be
/// logged and shown meaningfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The request could not be sent or the response body not read.
    #[error("network error: {reason}")]
    Network {
        /// Description of what went wrong.
        reason: String,
    },

    /// The source answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint that was requested.
        endpoint: String,
    },

    /// The body was not a JSON array of records.
    #[error("invalid record payload: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },

    /// A local record file could not be read.
    #[error("cannot read {path}: {reason}")]
    Io {
        /// Path that was read.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl LoadError {
    /// Create a network error from any error source.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network {
            reason: err.to_string(),
        }
    }

    /// Create a parse error from any error source.
    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }

    /// Short user-facing message for notifications.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network { .. } => "Could not reach the record source.",
            Self::Status { .. } => "The record source rejected the request.",
            Self::Parse { .. } => "The record source returned malformed data.",
            Self::Io { .. } => "The record file could not be read.",
        }
    }
}

/// Text did not name an editable record field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field '{input}' (expected name, email or role)")]
pub struct ParseFieldError {
    /// The rejected input.
    pub input: String,
}
