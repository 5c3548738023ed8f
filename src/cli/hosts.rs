use std::path::PathBuf;

use anyhow::Result;

pub fn execute(inventory_path: Option<PathBuf>, group: String) -> Result<()> {
    let inventory = super::run::load_inventory(inventory_path)?;
    let hosts = inventory.hosts(&group)?;

    println!(
        "Hosts in group '{}' ({}):\n",
        group,
        inventory.path().display()
    );
    for host in &hosts {
        let note = if host.is_local() { " (local)" } else { "" };
        println!("  {}{}", host, note);
    }

    Ok(())
}
