use crate::agents::UpgradeCandidate;
use crate::logbook::Logbook;
use colored::Colorize;

/// Render the fixed-width upgrade table: package padded to 30 columns,
/// installed version to 20, candidate unpadded. Names longer than a field
/// push the rest of the row right; nothing is truncated.
pub fn render_table(candidates: &[UpgradeCandidate]) -> String {
    let header = format!("{:<30}{:<20}{}", "Package", "Installed", "Candidate");
    let mut table = String::new();
    table.push_str(&header);
    table.push('\n');
    table.push_str(&"-".repeat(header.len()));
    table.push('\n');

    for candidate in candidates {
        table.push_str(&format!(
            "{:<30}{:<20}{}\n",
            candidate.package, candidate.installed, candidate.candidate
        ));
    }

    table
}

/// Print the check result and mirror the summary into the logbook.
pub fn print_report(candidates: &[UpgradeCandidate], logbook: &Logbook) {
    if candidates.is_empty() {
        println!("{}", "All packages are up to date.".green().bold());
        logbook.info("No packages to update.");
        return;
    }

    print!("{}", render_table(candidates));
    logbook.info(&format!(
        "Found {} upgradable package(s).",
        candidates.len()
    ));
}
