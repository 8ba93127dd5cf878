//! High-level task management interface
//!
//! This module provides the [`TaskManager`], the primary entry point the CLI
//! talks to. It resolves the project root, loads the optional `chore.yml`
//! configuration once, and dispatches to the individual tasks with a live
//! [`SystemRunner`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use chore_core::manager::{TaskManager, TaskManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> chore_core::types::ChoreResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     project_root: PathBuf::from("."),
//! })?;
//!
//! manager.validate()?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{parse_project_config, ProjectConfig, CONFIG_FILE_NAME};
use crate::exec::SystemRunner;
use crate::tasks;
use crate::tasks::publish::PublishOptions;
use crate::types::{ChoreError, ChoreResult};

/// High-level manager that owns the resolved project root and configuration
pub struct TaskManager {
    pub project_root: PathBuf,
    pub config: ProjectConfig,
}

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub project_root: PathBuf,
}

impl TaskManager {
    /// Initialize a new task manager from the given project root
    pub fn new(config: TaskManagerConfig) -> ChoreResult<Self> {
        let project_root = config.project_root.canonicalize().map_err(|e| {
            ChoreError::Config(format!(
                "Project root {} is not accessible: {}",
                config.project_root.display(),
                e
            ))
        })?;

        let project_config = Self::load_project_config(&project_root)?;

        Ok(Self {
            project_root,
            config: project_config,
        })
    }

    fn load_project_config(project_root: &Path) -> ChoreResult<ProjectConfig> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ChoreError::Config(format!(
                "Failed to read config {}: {}",
                config_path.display(),
                e
            ))
        })?;
        parse_project_config(&content)
    }

    /// Push the branch, upload a source distribution, and tag the release
    pub fn publish(&self, options: PublishOptions) -> ChoreResult<()> {
        tasks::publish::run(&self.project_root, &self.config, options, &SystemRunner)
    }

    /// Run the style checker and static analyzer over the package sources
    pub fn validate(&self) -> ChoreResult<()> {
        tasks::validate::run(&self.project_root, &self.config, &SystemRunner)
    }

    /// Auto-format every source directory in place; returns the directories
    /// that were formatted
    pub fn clean(&self) -> ChoreResult<Vec<PathBuf>> {
        tasks::clean::run(&self.project_root, &self.config, &SystemRunner)
    }

    /// Build the documentation site, treating warnings as errors
    pub fn docs(&self) -> ChoreResult<()> {
        tasks::docs::run(&self.project_root, &self.config, &SystemRunner)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_new_without_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = TaskManager::new(TaskManagerConfig {
            project_root: dir.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(manager.config.package(), "src");
        assert_eq!(manager.project_root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_new_loads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "package: mypkg\n").unwrap();

        let manager = TaskManager::new(TaskManagerConfig {
            project_root: dir.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(manager.config.package(), "mypkg");
    }

    #[test]
    fn test_new_rejects_missing_root() {
        let result = TaskManager::new(TaskManagerConfig {
            project_root: PathBuf::from("/nonexistent-chore-root"),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "package: [not, a, string").unwrap();

        let result = TaskManager::new(TaskManagerConfig {
            project_root: dir.path().to_path_buf(),
        });
        assert!(result.is_err());
    }
}
