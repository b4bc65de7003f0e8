//! CLI-facing output: batch rendering, per-entry updates, statistics.

use colored::*;
use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, OutcomeType, ProcessingStats};
use crate::suggest::{AvailabilityState, Suggestion};

fn state_label(state: &AvailabilityState) -> ColoredString {
    match state {
        AvailabilityState::Pending => "checking...".dimmed(),
        AvailabilityState::Available => "available".green().bold(),
        AvailabilityState::Unavailable => "taken".red(),
        AvailabilityState::Unknown { .. } => "unknown".yellow(),
    }
}

/// Prints the full batch, one numbered entry per suggestion.
pub fn print_batch(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("No suggestions were generated.");
        return;
    }
    println!();
    for (index, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {} [{}]",
            index + 1,
            suggestion.full_name().bold(),
            state_label(&suggestion.availability)
        );
        println!("     {}", suggestion.rationale());
    }
    println!();
}

/// Prints one line when an entry's availability settles.
pub fn print_entry_update(index: usize, suggestion: &Suggestion) {
    let full_name = suggestion.full_name();
    match &suggestion.availability {
        AvailabilityState::Available => {
            println!(
                "  {} {} is {}",
                "✔".green(),
                full_name.bold(),
                "available".green().bold()
            );
        }
        AvailabilityState::Unavailable => {
            println!("  {} {} is {}", "✖".red(), full_name.bold(), "taken".red());
        }
        AvailabilityState::Unknown { reason } => {
            println!(
                "  {} {} availability {}: {}",
                "?".yellow(),
                full_name.bold(),
                "unknown".yellow(),
                reason
            );
        }
        AvailabilityState::Pending => {
            // Updates only flow for settled entries; log if one slips through.
            log::debug!("entry {index} republished while still pending");
        }
    }
}

/// Prints the final availability summary, with registrar links for
/// candidates that are still free.
pub fn print_summary(suggestions: &[Suggestion], elapsed_seconds: f64) {
    let available: Vec<&Suggestion> = suggestions
        .iter()
        .filter(|s| s.availability == AvailabilityState::Available)
        .collect();

    println!();
    if available.is_empty() {
        println!(
            "No available domains among {} suggestion{} ({:.1}s).",
            suggestions.len(),
            if suggestions.len() == 1 { "" } else { "s" },
            elapsed_seconds
        );
        return;
    }

    println!("{}", "Available now:".green().bold());
    for suggestion in available {
        println!(
            "  {}  {}",
            suggestion.full_name().bold(),
            suggestion.registration_url().dimmed()
        );
    }
}

/// Prints error and outcome statistics to the log.
pub fn print_check_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_checks = stats.total_checks();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_checks > 0 {
        info!("Availability Outcomes ({} checks):", total_checks);
        for outcome in OutcomeType::iter() {
            let count = stats.get_outcome_count(outcome);
            if count > 0 {
                info!("   {}: {}", outcome.as_str(), count);
            }
        }
    }
}
