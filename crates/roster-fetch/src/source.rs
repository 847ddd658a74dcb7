//! Where records are loaded from.

use std::fmt;
use std::path::PathBuf;

/// A record source: an HTTP endpoint answering `GET` with a JSON array, or a
/// local file holding the same array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Http { endpoint: String },
    File { path: PathBuf },
}

impl RecordSource {
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self::Http {
            endpoint: endpoint.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { endpoint } => f.write_str(endpoint),
            Self::File { path } => write!(f, "{}", path.display()),
        }
    }
}
