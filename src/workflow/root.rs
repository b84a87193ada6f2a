//! Project root detection

use crate::error::DiscoveryError;
use std::path::{Path, PathBuf};

/// Markers identifying a project root
const ROOT_MARKERS: &[&str] = &[".git", ".github"];

/// Walk upward from `start` to the first directory holding `.git` or `.github`
pub fn find_project_root(start: &Path) -> Result<PathBuf, DiscoveryError> {
    let start = std::path::absolute(start).map_err(|e| DiscoveryError::read_error(start, e))?;

    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
        .ok_or(DiscoveryError::ProjectRootNotFound { start })
}
