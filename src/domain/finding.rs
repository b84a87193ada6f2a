//! Staleness findings

use super::ActionReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the abbreviated hash used for display
pub const SHORT_HASH_LEN: usize = 7;

/// Abbreviate a commit hash for display
pub fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}

/// A tag-pinned action with a newer qualifying tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedFinding {
    #[serde(rename = "file")]
    pub source_location: String,
    #[serde(rename = "action")]
    pub name: String,
    #[serde(rename = "current")]
    pub current_version: String,
    #[serde(rename = "latest")]
    pub latest_version: String,
}

impl OutdatedFinding {
    pub fn new(reference: &ActionReference, latest_version: impl Into<String>) -> Self {
        Self {
            source_location: reference.source_location.clone(),
            name: reference.name.clone(),
            current_version: reference.version.clone(),
            latest_version: latest_version.into(),
        }
    }
}

impl fmt::Display for OutdatedFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} -> {}",
            self.source_location, self.name, self.current_version, self.latest_version
        )
    }
}

/// A hash-pinned action trailing its default branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehindFinding {
    #[serde(rename = "file")]
    pub source_location: String,
    #[serde(rename = "action")]
    pub name: String,
    #[serde(rename = "current_sha")]
    pub current_hash: String,
    #[serde(rename = "latest_sha")]
    pub latest_hash: String,
    /// Always at least 1
    pub commits_behind: u64,
}

impl BehindFinding {
    /// Creates a finding, or `None` when the pin is not behind
    pub fn new(
        reference: &ActionReference,
        latest_hash: impl Into<String>,
        commits_behind: u64,
    ) -> Option<Self> {
        if commits_behind == 0 {
            return None;
        }
        Some(Self {
            source_location: reference.source_location.clone(),
            name: reference.name.clone(),
            current_hash: reference.version.clone(),
            latest_hash: latest_hash.into(),
            commits_behind,
        })
    }
}

impl fmt::Display for BehindFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} -> {} ({} behind)",
            self.source_location,
            self.name,
            short_hash(&self.current_hash),
            short_hash(&self.latest_hash),
            self.commits_behind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(version: &str) -> ActionReference {
        ActionReference::new("actions/checkout", version, ".github/workflows/ci.yml")
    }

    #[test]
    fn test_outdated_finding_new() {
        let finding = OutdatedFinding::new(&reference("v3"), "v4");
        assert_eq!(finding.name, "actions/checkout");
        assert_eq!(finding.current_version, "v3");
        assert_eq!(finding.latest_version, "v4");
        assert_eq!(finding.source_location, ".github/workflows/ci.yml");
    }

    #[test]
    fn test_outdated_finding_json_field_names() {
        let finding = OutdatedFinding::new(&reference("v3"), "v4");
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["file"], ".github/workflows/ci.yml");
        assert_eq!(json["action"], "actions/checkout");
        assert_eq!(json["current"], "v3");
        assert_eq!(json["latest"], "v4");
    }

    #[test]
    fn test_behind_finding_zero_is_none() {
        assert!(BehindFinding::new(&reference("abc1234"), "abc1234def", 0).is_none());
    }

    #[test]
    fn test_behind_finding_json_field_names() {
        let finding = BehindFinding::new(&reference("abc1234"), "def5678", 3).unwrap();
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["current_sha"], "abc1234");
        assert_eq!(json["latest_sha"], "def5678");
        assert_eq!(json["commits_behind"], 3);
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("abcdef1234567890"), "abcdef1");
        assert_eq!(short_hash("abc"), "abc");
    }

    #[test]
    fn test_behind_display() {
        let finding =
            BehindFinding::new(&reference("abcdef1234567890"), "1234567890abcdef", 2).unwrap();
        assert_eq!(
            format!("{}", finding),
            ".github/workflows/ci.yml: actions/checkout abcdef1 -> 1234567 (2 behind)"
        );
    }
}
