//! Core domain models for aver
//!
//! This module contains the fundamental types used throughout the application:
//! - Version model with precision tracking
//! - Action references, repository identities and pin classification
//! - Outdated and behind findings
//! - The aggregated check report

mod finding;
mod reference;
mod report;
mod version;

pub use finding::{short_hash, BehindFinding, OutdatedFinding, SHORT_HASH_LEN};
pub use reference::{
    is_hash_pin, ActionReference, PinKind, RepositoryIdentity, MAX_HASH_LEN, MIN_HASH_LEN,
};
pub use report::CheckReport;
pub use version::{versions_equal, ParsedVersion, Precision};
