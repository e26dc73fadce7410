use crate::agents::lister::PackageLister;
use crate::logbook::Logbook;
use crate::runner::CommandRunner;
use colored::Colorize;
use jiff::Zoned;
use std::thread;
use std::time::Duration;

/// MonitorLoop re-runs the upgradable check on a fixed interval, forever.
/// Each sweep is a fresh, independent check; nothing is carried between
/// iterations. Termination is external only (signal).
pub struct MonitorLoop<'a> {
    lister: PackageLister<'a>,
    logbook: &'a Logbook,
}

impl<'a> MonitorLoop<'a> {
    pub fn new(runner: &'a dyn CommandRunner, logbook: &'a Logbook) -> Self {
        Self {
            lister: PackageLister::new(runner, logbook),
            logbook,
        }
    }

    pub fn run(&self, interval_seconds: u64) -> ! {
        loop {
            self.sweep();
            thread::sleep(Duration::from_secs(interval_seconds));
        }
    }

    /// One monitoring pass: list upgradable packages and report them with
    /// the current local time.
    pub fn sweep(&self) {
        let stamp = Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();
        let packages = self.lister.list_upgradable();

        if packages.is_empty() {
            println!(
                "{}",
                format!("[{stamp}] All packages are up to date.").green()
            );
            self.logbook.info("No packages to update.");
            return;
        }

        println!(
            "{}",
            format!("[{stamp}] {} upgradable package(s):", packages.len()).yellow()
        );
        for package in &packages {
            println!("  • {}", package.white().bold());
        }
        self.logbook.info(&format!(
            "Found {} upgradable package(s): {}",
            packages.len(),
            packages.join(", ")
        ));
    }
}
