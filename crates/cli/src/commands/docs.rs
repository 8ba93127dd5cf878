use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub fn execute(manager: &TaskManager) -> Result<()> {
    println!(
        "{} {} {} {}",
        "Building docs".bold(),
        manager.config.docs_source().cyan(),
        "->".dimmed(),
        manager.config.docs_output().cyan()
    );
    println!();

    manager
        .docs()
        .map_err(|e| anyhow::anyhow!("Failed to build docs: {}", e))?;

    println!();
    println!("{} {}", "✓".green().bold(), "Documentation built".green());

    Ok(())
}
