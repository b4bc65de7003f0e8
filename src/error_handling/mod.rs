//! Error handling and processing statistics.
//!
//! This module provides:
//! - The typed error taxonomy of the suggestion pipeline
//! - Processing statistics tracking (generation errors, check outcomes)
//!
//! The taxonomy splits along the two pipeline phases: generation-phase
//! failures ([`SuggestError`]) abort the whole batch, while availability-phase
//! failures are contained per suggestion and are represented as values, never
//! as errors.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, OutcomeType, SuggestError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for outcome in OutcomeType::iter() {
            assert_eq!(stats.get_outcome_count(outcome), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ServiceError);
        assert_eq!(stats.get_error_count(ErrorType::ServiceError), 1);

        stats.increment_outcome(OutcomeType::Available);
        assert_eq!(stats.get_outcome_count(OutcomeType::Available), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MalformedResponse);
        stats.increment_outcome(OutcomeType::Available);
        stats.increment_outcome(OutcomeType::Taken);
        stats.increment_outcome(OutcomeType::Indeterminate);

        assert_eq!(stats.total_errors(), 1);
        assert_eq!(stats.total_checks(), 3);
    }
}
