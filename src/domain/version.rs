//! Version model for action tags and specifiers
//!
//! Handles version strings like:
//! - Major only: `v4`, `4`
//! - Major and minor: `v4.1`
//! - Full: `v4.1.7`
//!
//! Absent components count as zero for ordering, but the precision the
//! string was written with is kept on the value.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// `v?<digits>(.<digits>(.<digits>)?)?`
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?$").unwrap());

/// How many components a version string spelled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// `v6`
    Major,
    /// `v6.1`
    MajorMinor,
    /// `v6.1.0`
    Full,
}

/// A parsed tag or specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    /// The string exactly as it was parsed
    pub raw: String,
}

impl ParsedVersion {
    /// Parse a version string, returning `None` for anything outside the grammar
    ///
    /// Empty strings, four or more dotted groups, non-numeric groups and
    /// groups too large for `u64` are all rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(s)?;

        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = match caps.get(2) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        let patch = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(Self {
            major,
            minor,
            patch,
            raw: s.to_string(),
        })
    }

    /// The precision recovered from which components were present
    pub fn precision(&self) -> Precision {
        match (self.minor, self.patch) {
            (None, _) => Precision::Major,
            (Some(_), None) => Precision::MajorMinor,
            (Some(_), Some(_)) => Precision::Full,
        }
    }

    pub fn minor_or_zero(&self) -> u64 {
        self.minor.unwrap_or(0)
    }

    pub fn patch_or_zero(&self) -> u64 {
        self.patch.unwrap_or(0)
    }

    /// Numeric triple used for ordering
    pub fn magnitude(&self) -> (u64, u64, u64) {
        (self.major, self.minor_or_zero(), self.patch_or_zero())
    }

    /// Compare by magnitude only; `v1` and `v1.0.0` are equal here
    pub fn compare(&self, other: &Self) -> Ordering {
        self.magnitude().cmp(&other.magnitude())
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Compare two version strings for equality
///
/// Parseable strings compare by magnitude. Two unparseable strings compare
/// by their raw text. A parseable and an unparseable string are never equal.
pub fn versions_equal(a: &str, b: &str) -> bool {
    match (ParsedVersion::parse(a), ParsedVersion::parse(b)) {
        (Some(va), Some(vb)) => va.compare(&vb) == Ordering::Equal,
        (None, None) => a == b,
        _ => false,
    }
}
