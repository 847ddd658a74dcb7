//! View configuration.
//!
//! Values the controller starts with. They are plain data so that a
//! settings file can embed them as a `[view]` section.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_ROW_LIMIT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => panic!("default row limit must be non-zero"),
};

/// Row limits offered by the row limit selector.
pub const DEFAULT_ROW_LIMIT_OPTIONS: [usize; 4] = [5, 10, 20, 25];

/// Viewport widths at or below this value render compactly.
pub const DEFAULT_COMPACT_BREAKPOINT: u32 = 786;

/// Initial view settings for a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page at startup.
    pub row_limit: usize,
    /// Choices offered for the row limit.
    pub row_limit_options: Vec<usize>,
    /// Widest viewport (in pixels) that still uses compact density.
    pub compact_breakpoint: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            row_limit: DEFAULT_ROW_LIMIT.get(),
            row_limit_options: DEFAULT_ROW_LIMIT_OPTIONS.to_vec(),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
        }
    }
}

impl ViewConfig {
    /// The configured row limit, or the default when it is zero.
    pub fn initial_row_limit(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.row_limit).unwrap_or(DEFAULT_ROW_LIMIT)
    }

    /// Configured options without zeros, sorted and de-duplicated.
    pub fn row_limit_options(&self) -> Vec<NonZeroUsize> {
        let mut options: Vec<NonZeroUsize> = self
            .row_limit_options
            .iter()
            .copied()
            .filter_map(NonZeroUsize::new)
            .collect();
        options.sort_unstable();
        options.dedup();
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_row_limit_falls_back() {
        let config = ViewConfig {
            row_limit: 0,
            ..ViewConfig::default()
        };
        assert_eq!(config.initial_row_limit(), DEFAULT_ROW_LIMIT);
    }

    #[test]
    fn test_row_limit_options_cleaned() {
        let config = ViewConfig {
            row_limit_options: vec![25, 0, 5, 10, 5],
            ..ViewConfig::default()
        };
        let options: Vec<usize> = config
            .row_limit_options()
            .into_iter()
            .map(NonZeroUsize::get)
            .collect();
        assert_eq!(options, vec![5, 10, 25]);
    }
}
