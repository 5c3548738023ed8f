use anyhow::Result;
use clap::Parser;

use dnscheck::cli::{self, Cli, Commands};
use dnscheck::infrastructure::tracing::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            inventory,
            group,
            server,
            suite,
        } => cli::run::execute(inventory, group, server, suite),
        Commands::List { suite, server } => cli::list::execute(suite, server),
        Commands::Hosts { inventory, group } => cli::hosts::execute(inventory, group),
        Commands::Completions { shell } => cli::completions::execute(shell),
    }
}
