//! Conversions from transport failures into [`LoadError`].

use std::path::Path;

use roster_core::LoadError;

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Map a reqwest failure. Timeouts and connection errors are both network errors.
pub(crate) fn from_reqwest(err: &reqwest::Error) -> LoadError {
    if err.is_timeout() {
        LoadError::network(format!("request timed out: {err}"))
    } else {
        LoadError::network(err)
    }
}

pub(crate) fn from_status(status: reqwest::StatusCode, endpoint: &str) -> LoadError {
    LoadError::Status {
        status: status.as_u16(),
        endpoint: endpoint.to_string(),
    }
}

pub(crate) fn from_json(err: &serde_json::Error) -> LoadError {
    LoadError::parse(err)
}

pub(crate) fn from_io(path: &Path, err: &std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
