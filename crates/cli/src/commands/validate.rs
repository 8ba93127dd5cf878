use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub fn execute(manager: &TaskManager) -> Result<()> {
    println!(
        "{} {}",
        "Validating".bold(),
        manager.config.package().cyan()
    );
    println!();

    manager
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    println!();
    println!("{} {}", "✓".green().bold(), "All checks passed".green());

    Ok(())
}
