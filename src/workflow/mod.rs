//! Workflow discovery
//!
//! This module provides:
//! - Project root detection (`.git` / `.github`)
//! - Workflow file walking and `uses:` reference extraction

mod discover;
mod root;

pub use discover::{discover_references, extract_uses, parse_workflow, workflow_files};
pub use root::find_project_root;
