//! Chore Core Library
//!
//! This is the core library for the chore project-maintenance runner. It
//! provides the four maintenance tasks (publish, validate, clean, docs) as
//! ordered sequences of external-tool invocations, plus the configuration
//! and subprocess plumbing they share.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`manager`] - High-level task management interface
//! - [`tasks`] - The four maintenance tasks
//! - [`exec`] - Structured subprocess execution
//! - [`config`] - Project configuration parsing and defaults
//! - [`version`] - Version resolution and release tag computation
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`TaskManager`] which provides a
//! high-level interface for all tasks:
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

pub mod config;
pub mod exec;
pub mod manager;
pub mod tasks;
pub mod types;
pub mod version;

// Re-export the main types for easier usage
pub use manager::{TaskManager, TaskManagerConfig};
pub use tasks::PublishOptions;
pub use types::{ChoreError, ChoreResult};
