//! Workflow file discovery and `uses:` extraction
//!
//! Features:
//! - Walks `.github/workflows` for `.yml` / `.yaml` files in path order
//! - Collects every `uses:` value at any depth (steps, reusable workflow jobs)
//! - Skips local actions (`./...`) and docker references
//! - Deduplicates by (name, version, file)

use super::find_project_root;
use crate::domain::ActionReference;
use crate::error::DiscoveryError;
use serde_yaml::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Workflow directory relative to the project root
const WORKFLOWS_DIR: &str = ".github/workflows";

fn is_workflow_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Collect every `uses:` string in a parsed workflow, in document order
pub fn extract_uses(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_uses(value, &mut found);
    found
}

fn collect_uses(value: &Value, found: &mut Vec<String>) {
    match value {
        Value::Mapping(map) => {
            for (key, val) in map {
                if key.as_str() == Some("uses") {
                    if let Some(uses) = val.as_str() {
                        found.push(uses.to_string());
                    }
                } else {
                    collect_uses(val, found);
                }
            }
        }
        Value::Sequence(items) => {
            for item in items {
                collect_uses(item, found);
            }
        }
        Value::Tagged(tagged) => collect_uses(&tagged.value, found),
        _ => {}
    }
}

/// List workflow files under `root`, sorted by path
pub fn workflow_files(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let dir = root.join(WORKFLOWS_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
            DiscoveryError::read_error(path, std::io::Error::other(e.to_string()))
        })?;
        if entry.file_type().is_file() && is_workflow_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Parse workflow content into references attributed to `location`
pub fn parse_workflow(
    content: &str,
    path: &Path,
    location: &str,
) -> Result<Vec<ActionReference>, DiscoveryError> {
    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| DiscoveryError::yaml_parse_error(path, e.to_string()))?;

    Ok(extract_uses(&value)
        .iter()
        .filter_map(|uses| ActionReference::from_uses(uses, location))
        .collect())
}

/// Find all action references in the project containing `start`
pub fn discover_references(start: &Path) -> Result<Vec<ActionReference>, DiscoveryError> {
    let root = find_project_root(start)?;
    debug!(root = %root.display(), "project root");

    let mut references = Vec::new();
    let mut seen = HashSet::new();

    for path in workflow_files(&root)? {
        let content =
            std::fs::read_to_string(&path).map_err(|e| DiscoveryError::read_error(&path, e))?;
        let location = path
            .strip_prefix(&root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");

        for reference in parse_workflow(&content, &path, &location)? {
            if seen.insert(reference.clone()) {
                references.push(reference);
            }
        }
    }

    debug!(count = references.len(), "discovered action references");
    Ok(references)
}
