//! Search and filter engine.
//!
//! A record matches a query when any of its `name`, `email` or `role`
//! fields matches the query as a case-insensitive regular expression. Each
//! field is tested on its own, so a match can never straddle the boundary
//! between two fields. Queries that are not valid patterns are matched as
//! literal substrings instead.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::model::{Record, RecordField};

/// Upper bound on compiled pattern size; oversized patterns fall back to
/// literal matching like any other invalid pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A compiled search query.
///
/// Compilation happens once when the query text changes; matching is then a
/// pure function of the record.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    text: String,
    matcher: Matcher,
}

#[derive(Debug, Clone, Default)]
enum Matcher {
    #[default]
    All,
    Pattern(Regex),
    /// Lowercased query text, used when the pattern does not compile.
    Literal(String),
}

impl SearchQuery {
    /// Compile a query from user text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let matcher = if text.is_empty() {
            Matcher::All
        } else {
            compile(&text)
        };
        Self { text, matcher }
    }

    /// The query text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the query matches every record.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the query text was not a valid pattern and is matched literally.
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }

    /// Check whether a record matches on any searchable field.
    pub fn matches(&self, record: &Record) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Pattern(regex) => RecordField::ALL
                .iter()
                .any(|field| regex.is_match(record.field(*field))),
            Matcher::Literal(needle) => RecordField::ALL
                .iter()
                .any(|field| record.field(*field).to_lowercase().contains(needle.as_str())),
        }
    }
}

/// Derive the filtered view of `records` for `query`, preserving order.
pub fn filter<'a>(records: &'a [Record], query: &SearchQuery) -> Vec<&'a Record> {
    records.iter().filter(|record| query.matches(record)).collect()
}

fn compile(text: &str) -> Matcher {
    let built = RegexBuilder::new(text)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build();
    match built {
        Ok(regex) => Matcher::Pattern(regex),
        Err(error) => {
            debug!(query = text, %error, "Search pattern invalid, matching literally");
            Matcher::Literal(text.to_lowercase())
        }
    }
}
