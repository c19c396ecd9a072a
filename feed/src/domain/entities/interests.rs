//! Interest list domain entity
//!
//! The topics a feed is generated for. Order only affects prompt wording.

use serde::{Deserialize, Serialize};

/// Topics used when no interest list is available
pub const DEFAULT_INTERESTS: [&str; 2] = ["Tech News", "World Events"];

/// Ordered list of interest topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestList(Vec<String>);

impl InterestList {
    /// Parse one topic per line. Lines are trimmed and blank lines dropped.
    pub fn parse(contents: &str) -> Self {
        Self(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn topics(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for InterestList {
    fn default() -> Self {
        Self(DEFAULT_INTERESTS.iter().map(|t| t.to_string()).collect())
    }
}
