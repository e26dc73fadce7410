use crate::agents::lister::PackageLister;
use crate::agents::resolver::{UNKNOWN_CANDIDATE, VersionResolver};
use crate::logbook::Logbook;
use crate::runner::CommandRunner;
use indicatif::{ProgressBar, ProgressStyle};

/// One upgradable package with its installed and candidate versions. Built
/// fresh on every check, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradeCandidate {
    pub package: String,
    pub installed: String,
    pub candidate: String,
}

/// UpgradeChecker composes the lister and the resolver into the list of
/// actionable upgrade candidates.
pub struct UpgradeChecker<'a> {
    lister: PackageLister<'a>,
    resolver: VersionResolver<'a>,
}

impl<'a> UpgradeChecker<'a> {
    pub fn new(runner: &'a dyn CommandRunner, logbook: &'a Logbook) -> Self {
        Self {
            lister: PackageLister::new(runner, logbook),
            resolver: VersionResolver::new(runner, logbook),
        }
    }

    /// Collect all actionable candidates: packages whose candidate version
    /// is known and differs from the installed one. Resolution is serial,
    /// two subprocess calls per package.
    pub fn collect(&self) -> Vec<UpgradeCandidate> {
        let packages = self.lister.list_upgradable();
        if packages.is_empty() {
            return Vec::new();
        }

        let pb = ProgressBar::new(packages.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        let mut candidates = Vec::new();
        for package in packages {
            pb.set_message(format!("Checking {}", package));

            let versions = self.resolver.resolve(&package);
            if versions.candidate != UNKNOWN_CANDIDATE && versions.candidate != versions.installed {
                candidates.push(UpgradeCandidate {
                    package,
                    installed: versions.installed,
                    candidate: versions.candidate,
                });
            }

            pb.inc(1);
        }
        pb.finish_and_clear();

        candidates
    }
}
