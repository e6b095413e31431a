//! Pure formatting functions for UI output.
//!
//! Errors go to stderr, everything else to stdout.

use console::style;

use crate::cli::UpdateOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a message for a step that was intentionally skipped.
pub fn display_skip(message: &str) {
    println!("{} {}", style("↷").cyan(), message);
}

/// Render the line describing how the workflow ended.
pub fn outcome_message(outcome: &UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::SkippedPatch { tag } => format!("Skipping patch release: {}", tag),
        UpdateOutcome::AlreadyPresent { entry } => {
            format!("Release {} already exists, skipping", entry)
        }
        UpdateOutcome::Added { entry, path } => format!(
            "Successfully updated {} with new release: {}",
            path.display(),
            entry
        ),
        UpdateOutcome::WouldAdd { entry, path } => format!(
            "Dry run: would add release {} (contract: {}) to {}",
            entry,
            entry.contract,
            path.display()
        ),
    }
}

/// Display the result of an update run.
///
/// # Arguments
/// * `outcome` - What the workflow did
pub fn display_outcome(outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::SkippedPatch { .. } | UpdateOutcome::AlreadyPresent { .. } => {
            display_skip(&outcome_message(outcome));
        }
        UpdateOutcome::Added { entry, .. } | UpdateOutcome::WouldAdd { entry, .. } => {
            display_status(&format!(
                "Adding new release with major: {}, minor: {}, contract: {}",
                entry.major, entry.minor, entry.contract
            ));
            display_success(&outcome_message(outcome));
        }
    }
}
