//! Roster fetch - loads the master record collection.
//!
//! The record source is either an HTTP endpoint answering `GET` with a JSON
//! array of records, or a local file with the same content. Transport,
//! status and parse failures are all reported as [`roster_core::LoadError`].
//!
//! # Example
//!
//! ```no_run
//! use roster_core::Controller;
//! use roster_fetch::{DEFAULT_TIMEOUT, RecordClient, RecordSource};
//!
//! async fn refresh(controller: &mut Controller) -> roster_fetch::Result<()> {
//!     let client = RecordClient::new(DEFAULT_TIMEOUT)?;
//!     let source = RecordSource::http("https://example.com/members.json");
//!     controller.update(client.load(&source).await);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod source;

pub use client::{DEFAULT_TIMEOUT, RecordClient, parse_records, read_file};
pub use error::Result;
pub use source::RecordSource;
