use anyhow::Result;
use chore_core::manager::TaskManager;
use chore_core::PublishOptions;
use colored::*;

pub fn execute(manager: &TaskManager, skip_checks: bool) -> Result<()> {
    println!("{}", "Publishing release".bold());
    if skip_checks {
        println!("{}", "Skipping validation checks".yellow());
    }
    println!();

    manager
        .publish(PublishOptions {
            run_checks: !skip_checks,
        })
        .map_err(|e| anyhow::anyhow!("Failed to publish: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "Release published successfully!".green().bold()
    );

    Ok(())
}
