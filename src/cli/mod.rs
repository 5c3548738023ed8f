pub mod completions;
pub mod hosts;
pub mod list;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "dnscheck")]
#[command(about = "Verify DNS server records by running dig checks against inventory hosts")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the check suite against every inventory host
    Run {
        /// Inventory file (overrides DNSCHECK_INVENTORY)
        #[arg(long)]
        inventory: Option<PathBuf>,

        /// Inventory group to target
        #[arg(long, default_value = "all")]
        group: String,

        /// Resolver address passed to dig as @SERVER
        #[arg(long, default_value = "localhost")]
        server: String,

        /// Check suite file (defaults to the built-in suite)
        #[arg(long)]
        suite: Option<PathBuf>,
    },

    /// Show the checks and the commands they would run
    List {
        /// Check suite file (defaults to the built-in suite)
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Resolver address passed to dig as @SERVER
        #[arg(long, default_value = "localhost")]
        server: String,
    },

    /// Show the hosts discovered from the inventory
    Hosts {
        /// Inventory file (overrides DNSCHECK_INVENTORY)
        #[arg(long)]
        inventory: Option<PathBuf>,

        /// Inventory group to target
        #[arg(long, default_value = "all")]
        group: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
