use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aptup",
    about = "aptup - check, download, install, and monitor apt package upgrades",
    version,
    author
)]
pub struct Cli {
    /// Path of the append-only operation log
    #[arg(long, global = true, value_name = "PATH", default_value = "logs/aptup.log")]
    pub log_file: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check for upgradable packages and print their versions
    Check,

    /// Download and/or install available upgrades
    Update {
        /// Download packages without installing them
        #[arg(long)]
        download_only: bool,

        /// Skip the interactive confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Print the commands that would run without executing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Periodically re-check for upgradable packages
    Monitor {
        /// Seconds between checks
        #[arg(long, default_value_t = 60)]
        interval: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_interval_defaults_to_sixty_seconds() {
        let cli = Cli::parse_from(["aptup", "monitor"]);
        match cli.command {
            Commands::Monitor { interval } => assert_eq!(interval, 60),
            _ => panic!("expected monitor subcommand"),
        }
    }

    #[test]
    fn update_flags_default_off() {
        let cli = Cli::parse_from(["aptup", "update"]);
        match cli.command {
            Commands::Update {
                download_only,
                yes,
                dry_run,
            } => {
                assert!(!download_only);
                assert!(!yes);
                assert!(!dry_run);
            }
            _ => panic!("expected update subcommand"),
        }
    }

    #[test]
    fn log_file_is_a_global_option() {
        let cli = Cli::parse_from(["aptup", "check", "--log-file", "/tmp/other.log"]);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/other.log"));
    }
}
