//! Record source client.
//!
//! One `GET` per load, no retries and no caching. Every failure becomes a
//! [`LoadError`] so the controller can treat it as an empty result.

use std::path::Path;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use roster_core::{LoadError, Message, Record};
use tracing::{debug, info};

use crate::error::{self, Result};
use crate::source::RecordSource;

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent string for requests.
const USER_AGENT_VALUE: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Client for loading records from a [`RecordSource`].
#[derive(Debug, Clone)]
pub struct RecordClient {
    client: reqwest::Client,
}

impl RecordClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Load every record from `source`.
    pub async fn fetch(&self, source: &RecordSource) -> Result<Vec<Record>> {
        let records = match source {
            RecordSource::Http { endpoint } => self.fetch_http(endpoint).await?,
            RecordSource::File { path } => read_file(path).await?,
        };
        info!(%source, records = records.len(), "Fetched records");
        Ok(records)
    }

    /// Load from `source` and wrap the outcome as a controller message.
    pub async fn load(&self, source: &RecordSource) -> Message {
        Message::loaded(self.fetch(source).await)
    }

    async fn fetch_http(&self, endpoint: &str) -> Result<Vec<Record>> {
        debug!("Fetching records from {}", endpoint);

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| error::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::from_status(status, endpoint));
        }

        let body = response
            .text()
            .await
            .map_err(|e| error::from_reqwest(&e))?;
        parse_records(&body)
    }
}

/// Read records from a local JSON file.
pub async fn read_file(path: &Path) -> Result<Vec<Record>> {
    debug!("Reading records from {}", path.display());
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| error::from_io(path, &e))?;
    parse_records(&body)
}

/// Parse a JSON array of records.
///
/// Ids may be strings or non-negative integers.
pub fn parse_records(body: &str) -> Result<Vec<Record>> {
    serde_json::from_str(body).map_err(|e| error::from_json(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let body = r#"[
            {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
            {"id": 2, "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"}
        ]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id.as_str(), "2");
        assert_eq!(records[0].email, "aaron@mailinator.com");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(r#"{"users": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_records(r#"[{"id": "1", "name": "Aaron"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_client_builds() {
        assert!(RecordClient::new(DEFAULT_TIMEOUT).is_ok());
    }
}
