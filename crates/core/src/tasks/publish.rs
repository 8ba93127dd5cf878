//! Release publishing
//!
//! Pushes the current branch, uploads a source distribution, and marks the
//! release with a version tag. Mutates remote version-control state and the
//! package index; re-running after a successful release fails at the upload
//! or tag step because the version already exists.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::exec::{CommandLine, CommandRunner};
use crate::tasks::validate;
use crate::types::{ChoreError, ChoreResult};
use crate::version::{resolve_version, tag_name};

#[derive(Debug, Clone, Copy)]
pub struct PublishOptions {
    /// Run `validate` first; a failing check aborts the whole release
    /// before anything is pushed.
    pub run_checks: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self { run_checks: true }
    }
}

pub fn run(
    root: &Path,
    config: &ProjectConfig,
    options: PublishOptions,
    runner: &dyn CommandRunner,
) -> ChoreResult<()> {
    if options.run_checks {
        validate::run(root, config, runner)?;
    }

    // Resolve the version up front so a broken manifest aborts the release
    // before any remote state changes.
    let version = resolve_version(&root.join(config.manifest()))?;
    let tag = tag_name(&version);

    runner.run(&CommandLine::new("git", ["push".to_string()]).in_dir(root))?;

    let upload = config.upload_command();
    let (program, args) = upload.split_first().ok_or_else(|| {
        ChoreError::Config("publish.upload must name a command".to_string())
    })?;
    runner.run(&CommandLine::new(program.clone(), args.to_vec()).in_dir(root))?;

    runner.run(&CommandLine::new("git", ["tag".to_string(), tag]).in_dir(root))?;
    runner.run(
        &CommandLine::new(
            "git",
            [
                "push".to_string(),
                config.remote().to_string(),
                "--tags".to_string(),
            ],
        )
        .in_dir(root),
    )?;

    Ok(())
}
