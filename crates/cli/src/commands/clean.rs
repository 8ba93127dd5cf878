use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub fn execute(manager: &TaskManager) -> Result<()> {
    println!("{}", "Formatting source directories".bold());
    println!();

    let formatted = manager
        .clean()
        .map_err(|e| anyhow::anyhow!("Failed to format: {}", e))?;

    println!();
    if formatted.is_empty() {
        println!("  {}", "No source directories found".dimmed());
    } else {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Formatted {} directories", formatted.len()).green()
        );
    }

    Ok(())
}
