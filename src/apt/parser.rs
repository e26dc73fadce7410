//! Parsing of apt/dpkg free-text output.
//!
//! The output formats are an external, unversioned contract; every pattern
//! this tool matches against them lives here so a format change touches one
//! file only.

use regex::Regex;

/// Extract package names from `apt list --upgradable` output.
///
/// The first line is the `Listing...` header and is dropped. Each remaining
/// line contributes its first whitespace-delimited token, cut at the first
/// `/` (`libc6/stable 2.31 amd64 [...]` yields `libc6`). Token-free lines
/// are skipped; a token without `/` is kept whole.
pub fn upgradable_packages(listing_output: &str) -> Vec<String> {
    listing_output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .map(|token| token.split('/').next().unwrap_or(token).to_string())
        .collect()
}

/// Extract the candidate version from `apt-cache policy` output.
///
/// Returns `None` when no `Candidate:` line is present or when the value is
/// the literal `(none)` token.
pub fn candidate_version(policy_output: &str) -> Option<String> {
    let pattern = Regex::new(r"Candidate:\s*(\S+)").ok()?;
    let value = pattern.captures(policy_output)?.get(1)?.as_str();
    if value == "(none)" {
        return None;
    }
    Some(value.to_string())
}

/// Extract the installed version from `dpkg-query -W -f=${Version}` output.
///
/// Returns `None` when stdout is empty after trimming.
pub fn installed_version(query_output: &str) -> Option<String> {
    let version = query_output.trim();
    if version.is_empty() {
        return None;
    }
    Some(version.to_string())
}
