//! Resolution of references against a repository host
//!
//! This module provides:
//! - Run-scoped tag directory with per-repository caching
//! - Precision-aware staleness decision over a tag list
//! - Commit distance for hash-pinned references

mod commits;
mod staleness;
mod tags;

#[cfg(test)]
pub(crate) mod testing;

pub use commits::{CommitCache, CommitDistance, CommitDistanceResolver};
pub use staleness::{latest_stale_candidate, Strictness};
pub use tags::{TagCache, TagDirectory};
