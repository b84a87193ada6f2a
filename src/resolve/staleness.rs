//! Precision-aware staleness decision
//!
//! A caller pinning `@v6` has opted out of minor churn, so `v6.0.2` is not an
//! upgrade from `v6`. Comparisons happen at the precision of the caller's
//! specifier, never at the precision of the candidate tag.

use crate::domain::{ParsedVersion, Precision};
use std::cmp::Ordering;

/// How strictly a newer tag must differ from the current specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Only bare major tags (`v7`) with a greater major count
    MajorOnly,
    /// Compare at the precision the specifier was written with
    #[default]
    RespectSpecifierPrecision,
}

/// Find the newest tag that makes `current` stale
///
/// Returns `None` when `current` is unparseable, when no tag parses, or when
/// no parsed tag qualifies as newer under `strictness`. Among candidates of
/// equal magnitude the most precise tag is reported (`v2.0.0` over `v2`).
pub fn latest_stale_candidate(
    tags: &[String],
    current: &str,
    strictness: Strictness,
) -> Option<String> {
    let current = ParsedVersion::parse(current)?;

    let mut candidates: Vec<ParsedVersion> =
        tags.iter().filter_map(|t| ParsedVersion::parse(t)).collect();
    candidates.sort_by(|a, b| {
        b.compare(a)
            .then_with(|| b.precision().cmp(&a.precision()))
    });

    candidates
        .into_iter()
        .find(|candidate| is_newer(candidate, &current, strictness))
        .map(|candidate| candidate.raw)
}

/// Whether `candidate` supersedes `current` under `strictness`
fn is_newer(candidate: &ParsedVersion, current: &ParsedVersion, strictness: Strictness) -> bool {
    match strictness {
        Strictness::MajorOnly => {
            candidate.precision() == Precision::Major && candidate.major > current.major
        }
        Strictness::RespectSpecifierPrecision => match current.precision() {
            Precision::Major => candidate.major > current.major,
            Precision::MajorMinor => {
                (candidate.major, candidate.minor_or_zero())
                    > (current.major, current.minor_or_zero())
            }
            Precision::Full => candidate.compare(current) == Ordering::Greater,
        },
    }
}
