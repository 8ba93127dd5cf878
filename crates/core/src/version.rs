//! Version resolution for release tagging
//!
//! The version identifier is read from the maintained project's own manifest
//! in a single explicit step at the start of `publish`, then checked for tag
//! safety before any remote state is touched.

use std::fs;
use std::path::Path;

use crate::types::{ChoreError, ChoreResult};

/// Read the version identifier from a TOML manifest, looking at
/// `project.version` first and `package.version` second.
pub fn resolve_version(manifest: &Path) -> ChoreResult<String> {
    let content = fs::read_to_string(manifest).map_err(|e| {
        ChoreError::Version(format!(
            "Failed to read manifest {}: {}",
            manifest.display(),
            e
        ))
    })?;

    let value: toml::Value = content.parse()?;

    let version = ["project", "package"]
        .iter()
        .find_map(|table| value.get(table)?.get("version")?.as_str())
        .ok_or_else(|| {
            ChoreError::Version(format!(
                "No project.version or package.version in {}",
                manifest.display()
            ))
        })?;

    let version = version.to_string();
    validate_tag_suffix(&version)?;
    Ok(version)
}

/// Check that a version string is usable as a git tag suffix.
pub fn validate_tag_suffix(version: &str) -> ChoreResult<()> {
    let valid = !version.is_empty()
        && !version.starts_with('.')
        && !version.ends_with('.')
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'));

    if valid {
        Ok(())
    } else {
        Err(ChoreError::Version(format!(
            "Version '{}' is not a valid tag suffix",
            version
        )))
    }
}

/// Compute the release tag for a version identifier.
pub fn tag_name(version: &str) -> String {
    format!("v{}", version)
}
