use std::path::PathBuf;

use anyhow::Result;

pub fn execute(suite_path: Option<PathBuf>, server: String) -> Result<()> {
    let checks = super::run::load_checks(suite_path.as_deref(), &server)?;

    println!("Checks ({}):\n", checks.len());
    for check in &checks {
        println!("  {} ({})", check.name(), check.expectation());
        println!("    {}", check.command());
        println!();
    }

    Ok(())
}
