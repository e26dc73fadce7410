use crate::agents::{MonitorLoop, UpdateExecutor, UpdateOutcome, UpgradeChecker};
use crate::error::Result;
use crate::logbook::Logbook;
use crate::report;
use crate::runner::CommandRunner;
use colored::Colorize;
use std::io;

/// Execute the check workflow: list upgradable packages, resolve their
/// versions, and print the report table.
pub fn execute_check(runner: &dyn CommandRunner, logbook: &Logbook) -> Result<()> {
    println!("{}", "Checking for upgradable packages...".cyan().bold());
    logbook.info("Gathering upgradable package version status...");

    let checker = UpgradeChecker::new(runner, logbook);
    let candidates = checker.collect();

    report::print_report(&candidates, logbook);
    logbook.info("Upgradable package version status displayed.");

    Ok(())
}

/// Execute the update workflow. Failures and cancellation are reported and
/// logged by the executor; neither is an error to the caller.
pub fn execute_update(
    runner: &dyn CommandRunner,
    logbook: &Logbook,
    download_only: bool,
    auto_confirm: bool,
    dry_run: bool,
) -> Result<()> {
    println!("{}", "Updating packages...".cyan().bold());
    logbook.info("Preparing package update...");

    let executor = UpdateExecutor::new(runner, logbook);
    let mut input = io::stdin().lock();
    let outcome = executor.run(download_only, auto_confirm, dry_run, &mut input)?;

    if outcome == UpdateOutcome::Success && !dry_run {
        println!("\n{}", "✨ Update process completed!".green().bold());
    }

    Ok(())
}

/// Execute the monitor workflow. Never returns under normal operation; the
/// loop ends only with the process.
pub fn execute_monitor(runner: &dyn CommandRunner, logbook: &Logbook, interval: u64) -> Result<()> {
    println!(
        "{}",
        format!("Monitoring for upgradable packages every {interval}s (Ctrl-C to stop)...")
            .cyan()
            .bold()
    );
    logbook.info(&format!("Monitor started with a {interval}s interval."));

    let monitor = MonitorLoop::new(runner, logbook);
    monitor.run(interval)
}
