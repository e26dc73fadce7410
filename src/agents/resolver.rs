use crate::apt::{commands, parser};
use crate::logbook::Logbook;
use crate::runner::CommandRunner;

/// Sentinel for a package the system database does not know as installed.
pub const NOT_INSTALLED: &str = "N/A";
/// Sentinel for a missing or `(none)` candidate version.
pub const UNKNOWN_CANDIDATE: &str = "unknown";

pub struct ResolvedVersions {
    pub installed: String,
    pub candidate: String,
}

/// VersionResolver looks up the installed and candidate version strings for
/// one package, two subprocess calls per package. Versions are opaque
/// tokens; no ordering is ever applied to them.
pub struct VersionResolver<'a> {
    runner: &'a dyn CommandRunner,
    logbook: &'a Logbook,
}

impl<'a> VersionResolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner, logbook: &'a Logbook) -> Self {
        Self { runner, logbook }
    }

    /// Resolve both versions for a package. Lookup failures are tolerated
    /// per package: they map to the sentinels and a warning log entry.
    pub fn resolve(&self, package: &str) -> ResolvedVersions {
        ResolvedVersions {
            installed: self.installed(package),
            candidate: self.candidate(package),
        }
    }

    fn installed(&self, package: &str) -> String {
        match self.runner.run(&commands::installed_version(package)) {
            // Non-zero exit means the package is not installed yet, which
            // is an ordinary answer, not a failure.
            Ok(output) if output.success() => parser::installed_version(&output.stdout)
                .unwrap_or_else(|| NOT_INSTALLED.to_string()),
            Ok(_) => NOT_INSTALLED.to_string(),
            Err(e) => {
                self.logbook
                    .warning(&format!("dpkg-query failed for {package}: {e}"));
                NOT_INSTALLED.to_string()
            }
        }
    }

    fn candidate(&self, package: &str) -> String {
        match self.runner.run(&commands::candidate_policy(package)) {
            Ok(output) if output.success() => parser::candidate_version(&output.stdout)
                .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string()),
            Ok(output) => {
                self.logbook.warning(&format!(
                    "apt-cache policy failed for {package}: {}",
                    output.stderr.trim()
                ));
                UNKNOWN_CANDIDATE.to_string()
            }
            Err(e) => {
                self.logbook
                    .warning(&format!("apt-cache policy failed for {package}: {e}"));
                UNKNOWN_CANDIDATE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::script::{ScriptedRunner, failed_output, launch_failure, ok_output};
    use std::fs;
    use tempfile::tempdir;

    fn logbook_in(dir: &tempfile::TempDir) -> (Logbook, std::path::PathBuf) {
        let path = dir.path().join("aptup.log");
        (Logbook::open(&path).unwrap(), path)
    }

    #[test]
    fn resolves_both_versions() {
        let dir = tempdir().unwrap();
        let (logbook, _) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            ok_output("2.30\n"),
            ok_output("libc6:\n  Installed: 2.30\n  Candidate: 2.31\n"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("libc6");

        assert_eq!(versions.installed, "2.30");
        assert_eq!(versions.candidate, "2.31");
        assert_eq!(
            runner.recorded_calls(),
            vec![
                "dpkg-query -W -f=${Version} libc6",
                "apt-cache policy libc6",
            ]
        );
    }

    #[test]
    fn failed_installed_query_is_not_installed() {
        let dir = tempdir().unwrap();
        let (logbook, _) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            failed_output(1, "no packages found matching ghost"),
            ok_output("ghost:\n  Candidate: 1.2\n"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("ghost");

        assert_eq!(versions.installed, NOT_INSTALLED);
        assert_eq!(versions.candidate, "1.2");
    }

    #[test]
    fn empty_installed_output_is_not_installed() {
        let dir = tempdir().unwrap();
        let (logbook, _) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            ok_output(""),
            ok_output("ghost:\n  Candidate: 1.2\n"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("ghost");

        assert_eq!(versions.installed, NOT_INSTALLED);
    }

    #[test]
    fn missing_candidate_line_is_unknown() {
        let dir = tempdir().unwrap();
        let (logbook, _) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            ok_output("2.30\n"),
            ok_output("libc6:\n  Installed: 2.30\n"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("libc6");

        assert_eq!(versions.candidate, UNKNOWN_CANDIDATE);
    }

    #[test]
    fn none_candidate_token_is_unknown() {
        let dir = tempdir().unwrap();
        let (logbook, _) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            ok_output("2.30\n"),
            ok_output("libc6:\n  Installed: 2.30\n  Candidate: (none)\n"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("libc6");

        assert_eq!(versions.candidate, UNKNOWN_CANDIDATE);
    }

    #[test]
    fn launch_failures_map_to_sentinels_with_warnings() {
        let dir = tempdir().unwrap();
        let (logbook, log_path) = logbook_in(&dir);
        let runner = ScriptedRunner::new(vec![
            launch_failure("dpkg-query not found"),
            launch_failure("apt-cache not found"),
        ]);

        let versions = VersionResolver::new(&runner, &logbook).resolve("libc6");

        assert_eq!(versions.installed, NOT_INSTALLED);
        assert_eq!(versions.candidate, UNKNOWN_CANDIDATE);
        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("WARNING - dpkg-query failed for libc6:"));
        assert!(log.contains("WARNING - apt-cache policy failed for libc6:"));
    }
}
