//! aver - GitHub Actions version checker library
//!
//! This library provides the core functionality for finding stale action
//! references in GitHub Actions workflows:
//! - Tag-pinned references compared against release tags at the precision
//!   they were written with (`v4` is not stale because `v4.1.0` exists)
//! - SHA-pinned references measured in commits behind the default branch

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolve;
pub mod workflow;
