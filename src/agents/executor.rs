use crate::apt::commands;
use crate::error::Result;
use crate::logbook::Logbook;
use crate::runner::{CommandLine, CommandRunner};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Outcome of one update run. Cancellation is an ordinary outcome of the
/// confirmation step, not a fault.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UpdateOutcome {
    Success,
    Failure(String),
    Cancelled,
}

/// UpdateExecutor drives the download/refresh/upgrade sequence. The refresh
/// and upgrade steps are the only commands in the whole tool that mutate
/// system state.
pub struct UpdateExecutor<'a> {
    runner: &'a dyn CommandRunner,
    logbook: &'a Logbook,
}

impl<'a> UpdateExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, logbook: &'a Logbook) -> Self {
        Self { runner, logbook }
    }

    /// Run the update state machine.
    ///
    /// `dry_run` takes precedence over every other flag: the command plan is
    /// printed and nothing is executed, not even the confirmation prompt.
    /// Confirmation replies other than `y` (trimmed, lowercased) cancel
    /// before any subprocess runs. `input` is stdin in production; the only
    /// error this returns is a failed read from it.
    pub fn run(
        &self,
        download_only: bool,
        auto_confirm: bool,
        dry_run: bool,
        input: &mut dyn BufRead,
    ) -> Result<UpdateOutcome> {
        if dry_run {
            return Ok(self.print_plan(download_only));
        }

        if download_only {
            return Ok(self.download());
        }

        if !auto_confirm {
            println!(
                "{}",
                "[!] Package installation may change your system.".yellow()
            );
            print!("{}", "Proceed with installation? [y/N]: ".bold());
            io::stdout().flush()?;

            let mut reply = String::new();
            input.read_line(&mut reply)?;

            if reply.trim().to_lowercase() != "y" {
                println!("{}", "[i] Installation cancelled.".cyan());
                self.logbook.info("User cancelled installation.");
                return Ok(UpdateOutcome::Cancelled);
            }
        }

        self.logbook.info("Refreshing package index...");
        if let Some(failure) = self.execute(&commands::refresh_index(), "Package index refresh") {
            return Ok(failure);
        }
        println!("{}", "[✔] Package index refreshed.".green());

        self.logbook.info("Starting package installation...");
        if let Some(failure) = self.execute(&commands::upgrade(), "Installation") {
            return Ok(failure);
        }
        println!("{}", "[✔] Installation complete.".green());
        self.logbook.info("Package installation succeeded");

        Ok(UpdateOutcome::Success)
    }

    fn print_plan(&self, download_only: bool) -> UpdateOutcome {
        println!(
            "{}",
            "[i] Dry run - the following commands would be executed:".cyan()
        );
        if download_only {
            println!("    {}", commands::download());
        } else {
            println!("    {}", commands::refresh_index());
            println!("    {}", commands::upgrade());
        }
        self.logbook.info("Dry run requested; no commands executed.");
        UpdateOutcome::Success
    }

    fn download(&self) -> UpdateOutcome {
        self.logbook
            .info("Attempting to download upgradable packages...");
        match self.execute(&commands::download(), "Download") {
            Some(failure) => failure,
            None => {
                println!("{}", "[✔] Package download complete.".green());
                self.logbook.info("Package download succeeded");
                UpdateOutcome::Success
            }
        }
    }

    /// Run one command; `None` on success, `Some(Failure)` otherwise.
    fn execute(&self, command: &CommandLine, what: &str) -> Option<UpdateOutcome> {
        match self.runner.run(command) {
            Ok(output) if output.success() => None,
            Ok(output) => {
                let stderr = output.stderr.trim().to_string();
                println!("{}", format!("[!] {what} failed:\n{stderr}").red());
                self.logbook.error(&format!("{what} failed: {stderr}"));
                Some(UpdateOutcome::Failure(stderr))
            }
            Err(e) => {
                println!("{}", format!("[!] {what} failed:\n{e}").red());
                self.logbook.error(&format!("{what} failed: {e}"));
                Some(UpdateOutcome::Failure(e.to_string()))
            }
        }
    }
}
