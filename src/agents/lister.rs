use crate::apt::{commands, parser};
use crate::logbook::Logbook;
use crate::runner::CommandRunner;
use colored::Colorize;

/// PackageLister queries apt for the set of upgradable packages.
pub struct PackageLister<'a> {
    runner: &'a dyn CommandRunner,
    logbook: &'a Logbook,
}

impl<'a> PackageLister<'a> {
    pub fn new(runner: &'a dyn CommandRunner, logbook: &'a Logbook) -> Self {
        Self { runner, logbook }
    }

    /// List the names of all upgradable packages.
    ///
    /// A listing command that cannot be launched or exits non-zero is not an
    /// error to the caller: the failure is printed and logged, and an empty
    /// list comes back.
    pub fn list_upgradable(&self) -> Vec<String> {
        let output = match self.runner.run(&commands::list_upgradable()) {
            Ok(output) => output,
            Err(e) => {
                println!(
                    "{}",
                    "[!] Failed to retrieve upgradable package list.".red()
                );
                self.logbook.error(&format!("apt list failed: {e}"));
                return Vec::new();
            }
        };

        if !output.success() {
            println!(
                "{}",
                "[!] Failed to retrieve upgradable package list.".red()
            );
            self.logbook
                .error(&format!("apt list failed: {}", output.stderr.trim()));
            return Vec::new();
        }

        parser::upgradable_packages(&output.stdout)
    }
}
