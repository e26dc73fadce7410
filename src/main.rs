mod agents;
mod apt;
mod cli;
mod error;
mod logbook;
mod report;
mod runner;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use logbook::Logbook;
use runner::SystemRunner;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("APTUP_VERBOSE", "1");
        }
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> error::Result<()> {
    let logbook = Logbook::open(&cli.log_file)?;
    let runner = SystemRunner;

    match cli.command {
        Commands::Check => workflow::execute_check(&runner, &logbook),
        Commands::Update {
            download_only,
            yes,
            dry_run,
        } => workflow::execute_update(&runner, &logbook, download_only, yes, dry_run),
        Commands::Monitor { interval } => workflow::execute_monitor(&runner, &logbook, interval),
    }
}
