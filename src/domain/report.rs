//! Aggregated result of a check run

use super::{BehindFinding, OutdatedFinding};
use serde::{Deserialize, Serialize};

/// Outdated findings, behind findings and warnings from one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Tag-pinned references with a newer qualifying tag, in input order
    pub outdated: Vec<OutdatedFinding>,
    /// Hash-pinned references trailing their default branch, in input order
    #[serde(rename = "sha_pinned")]
    pub behind: Vec<BehindFinding>,
    /// Repositories skipped because they could not be accessed
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither finding collection has entries
    ///
    /// Warnings do not affect the verdict.
    pub fn is_up_to_date(&self) -> bool {
        self.outdated.is_empty() && self.behind.is_empty()
    }
}
