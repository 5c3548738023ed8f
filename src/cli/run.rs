use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::application::{VerifyHost, count_failures};
use crate::domain::Check;
use crate::infrastructure::config::{default_suite, load_suite};
use crate::infrastructure::inventory::Inventory;
use crate::infrastructure::runner::ShellRunner;

pub fn execute(
    inventory_path: Option<PathBuf>,
    group: String,
    server: String,
    suite_path: Option<PathBuf>,
) -> Result<()> {
    let inventory = load_inventory(inventory_path)?;
    let hosts = inventory.hosts(&group)?;
    let checks = load_checks(suite_path.as_deref(), &server)?;

    tracing::info!(
        inventory = %inventory.path().display(),
        hosts = hosts.len(),
        checks = checks.len(),
        "starting verification"
    );

    let runner = ShellRunner::new();
    let verify = VerifyHost::new(&runner);

    let mut total_failures = 0;
    for host in &hosts {
        println!("{}:", host);
        let reports = verify.execute(host, &checks);
        for report in &reports {
            println!("  {:<20} {}", report.name, report.outcome);
        }
        total_failures += count_failures(&reports);
        println!();
    }

    if total_failures > 0 {
        bail!(
            "{} of {} check(s) failed across {} host(s)",
            total_failures,
            checks.len() * hosts.len(),
            hosts.len()
        );
    }

    println!(
        "All {} check(s) passed on {} host(s).",
        checks.len(),
        hosts.len()
    );
    Ok(())
}

/// `--inventory` wins over the environment variable.
pub(crate) fn load_inventory(path: Option<PathBuf>) -> Result<Inventory> {
    let inventory = match path {
        Some(path) => Inventory::load(path)?,
        None => Inventory::from_env()?,
    };
    Ok(inventory)
}

pub(crate) fn load_checks(suite_path: Option<&Path>, server: &str) -> Result<Vec<Check>> {
    let checks = match suite_path {
        Some(path) => load_suite(path, server)?,
        None => default_suite(server),
    };
    Ok(checks)
}
