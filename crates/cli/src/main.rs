use std::path::PathBuf;

use anyhow::Result;
use chore_core::manager::{TaskManager, TaskManagerConfig};
use clap::{Parser, Subcommand};

mod commands;

/// Chore - A project-maintenance task runner
#[derive(Parser)]
#[command(name = "chore")]
#[command(about = "Run routine maintenance tasks for a project")]
#[command(version)]
struct Cli {
    /// Path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push the branch, upload a source distribution, and tag the release
    Publish {
        /// Skip the validation checks that normally gate a release
        #[arg(long)]
        skip_checks: bool,
    },
    /// Run the style checker and static analyzer
    Validate,
    /// Auto-format all source directories in place
    Clean,
    /// Build the documentation site, treating warnings as errors
    Docs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the project root and configuration once, up front
    let manager = TaskManager::new(TaskManagerConfig {
        project_root: cli.project,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize project: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::Publish { skip_checks } => commands::publish::execute(&manager, skip_checks),
        Commands::Validate => commands::validate::execute(&manager),
        Commands::Clean => commands::clean::execute(&manager),
        Commands::Docs => commands::docs::execute(&manager),
    }
}
