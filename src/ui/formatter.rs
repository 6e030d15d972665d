//! Pure formatting functions for UI output.
//!
//! This module contains all display logic separated from user interaction.
//! Styling goes through `console`, which drops colors when the output is not
//! a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{BumpCandidates, BumpChoice, SemanticVersion, VersionBump};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Show the package and its versions before the bump menu.
///
/// # Arguments
/// * `package` - Package name from the manifest
/// * `current` - Version currently in the manifest
/// * `installed` - Locally installed version, if it could be determined
pub fn display_versions(package: &str, current: &SemanticVersion, installed: Option<&str>) {
    println!("\n{}", style(format!("Releasing {}", package)).bold());
    println!("  Current version:   {}", style(current).cyan());
    println!(
        "  Installed version: {}",
        installed.unwrap_or("not installed")
    );
}

/// Menu line for one entry, e.g. `1) patch  → 1.0.1`
pub fn menu_entry(key: char, choice: &BumpChoice, candidates: &BumpCandidates) -> String {
    match choice {
        BumpChoice::Bump(bump) => format!(
            "{}) {:<6} → {}",
            key,
            bump.as_arg(),
            candidates.get(*bump)
        ),
        BumpChoice::Skip => format!("{}) skip   (keep current version)", key),
    }
}

/// Display the numbered version bump menu.
pub fn display_bump_menu(candidates: &BumpCandidates) {
    println!("\n{}", style("Select version bump:").bold());
    for (key, choice) in BumpChoice::MENU.iter() {
        println!("  {}", menu_entry(*key, choice, candidates));
    }
}

/// Display the version change after a bump (or the kept version after skip).
pub fn display_version_change(
    from: &SemanticVersion,
    to: &SemanticVersion,
    bump: Option<VersionBump>,
) {
    match bump {
        Some(bump) => display_success(&format!(
            "Bumped {} version: {} → {}",
            bump,
            style(from).red(),
            style(to).green()
        )),
        None => display_status(&format!("Keeping version {}", to)),
    }
}

/// Display the build artifacts awaiting upload.
pub fn display_artifacts(artifacts: &[String]) {
    println!("\n{}", style("Build artifacts:").bold());
    for artifact in artifacts {
        println!("  - {}", artifact);
    }
}

/// Display the post-publish summary.
pub fn display_release_summary(package: &str, version: &SemanticVersion, url: &str) {
    println!("\n{}", style("Release summary").bold().underlined());
    println!("  Package: {}", package);
    println!("  Version: {}", style(version).green());
    println!("  URL:     {}", style(url).cyan());
}

/// Remind the user that a tag exists only locally.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} Tag {} exists only locally. To publish it, run:\n  {}",
        style("→").yellow(),
        tag,
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
