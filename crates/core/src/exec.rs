//! Structured subprocess execution
//!
//! This module provides a unified interface for running external tools with
//! consistent error handling. Commands are always built from an explicit
//! program and argument list, never a shell string, so arguments containing
//! spaces or metacharacters cannot be misinterpreted.

use std::path::PathBuf;
use std::process::Command;

use colored::*;

use crate::types::{ChoreError, ChoreResult};

/// A fully specified external-command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the command. `None` inherits the process cwd.
    pub cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Human-readable rendering for status output and error messages.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Executes command lines. The system implementation shells out; tests
/// substitute a recording fake to assert on exactly what would run.
pub trait CommandRunner {
    fn run(&self, cmd: &CommandLine) -> ChoreResult<()>;
}

/// Runner backed by [`std::process::Command`], blocking until the child
/// exits. The first non-zero exit aborts the enclosing task; no retries.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandLine) -> ChoreResult<()> {
        println!("  {} {}", "$".bright_black(), cmd.display().bright_black());

        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args);
        if let Some(cwd) = &cmd.cwd {
            command.current_dir(cwd);
        }

        let status = command.status().map_err(|e| {
            ChoreError::Task(format!("Failed to execute command '{}': {}", cmd.display(), e))
        })?;

        if !status.success() {
            return Err(ChoreError::Task(format!(
                "Command '{}' failed with exit code: {}",
                cmd.display(),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}
