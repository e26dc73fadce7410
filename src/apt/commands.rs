//! The exact apt/dpkg command lines this tool runs.
//!
//! Only `refresh_index`, `upgrade`, and `download` mutate the system; they
//! run under sudo. Everything else is a read-only query.

use crate::runner::CommandLine;

pub fn list_upgradable() -> CommandLine {
    CommandLine::new("apt").args(["list", "--upgradable"])
}

pub fn installed_version(package: &str) -> CommandLine {
    CommandLine::new("dpkg-query")
        .args(["-W", "-f=${Version}"])
        .arg(package)
}

pub fn candidate_policy(package: &str) -> CommandLine {
    CommandLine::new("apt-cache").arg("policy").arg(package)
}

pub fn refresh_index() -> CommandLine {
    CommandLine::new("sudo").args(["apt-get", "update"])
}

pub fn upgrade() -> CommandLine {
    CommandLine::new("sudo").args(["apt-get", "upgrade", "-y"])
}

pub fn download() -> CommandLine {
    CommandLine::new("sudo").args(["apt-get", "-d", "upgrade", "-y"])
}
