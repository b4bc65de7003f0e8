//! domain_scout library: AI-assisted domain name brainstorming.
//!
//! This library turns a free-text project description into a batch of
//! candidate domain names (via a generative-language service) and checks each
//! candidate's registration availability (via a WHOIS-style lookup service),
//! with bounded retry and per-candidate failure isolation.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use domain_scout::{run_brainstorm, Opt};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Opt::parse_from(["domain_scout", "an online bakery in Jakarta"]);
//! let report = run_brainstorm(config).await?;
//! println!(
//!     "{} suggestions: {} available, {} taken, {} unknown",
//!     report.suggestions.len(),
//!     report.available,
//!     report.taken,
//!     report.unknown
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! A Tokio runtime, and a generative-service credential in the
//! `GEMINI_API_KEY` (or `API_KEY`) environment variable.

#![warn(missing_docs)]

mod app;
pub mod availability;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod orchestrator;
pub mod suggest;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::{ErrorType, OutcomeType, ProcessingStats, SuggestError};
pub use run::{run_brainstorm, BrainstormReport};

// Internal run module (wires the pipeline together for the CLI)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use url::Url;

    use crate::app;
    use crate::availability::AvailabilityChecker;
    use crate::config::{Opt, AVAILABILITY_API_BASE};
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_http_client;
    use crate::orchestrator::Orchestrator;
    use crate::suggest::{
        AvailabilityState, GenerativeClient, RequestOptions, Suggestion, SuggestionGenerator,
    };

    /// Results of one brainstorming run.
    #[derive(Debug, Clone)]
    pub struct BrainstormReport {
        /// The settled batch (entries stay pending with `--skip-availability`).
        pub suggestions: Vec<Suggestion>,
        /// Number of candidates reported available.
        pub available: usize,
        /// Number of candidates reported taken.
        pub taken: usize,
        /// Number of candidates whose availability is unknown.
        pub unknown: usize,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    fn report_from(suggestions: Vec<Suggestion>, elapsed_seconds: f64) -> BrainstormReport {
        let mut available = 0;
        let mut taken = 0;
        let mut unknown = 0;
        for suggestion in &suggestions {
            match suggestion.availability {
                AvailabilityState::Available => available += 1,
                AvailabilityState::Unavailable => taken += 1,
                AvailabilityState::Unknown { .. } => unknown += 1,
                AvailabilityState::Pending => {}
            }
        }
        BrainstormReport {
            suggestions,
            available,
            taken,
            unknown,
            elapsed_seconds,
        }
    }

    /// Runs one brainstorming session with the provided configuration.
    ///
    /// This is the main entry point for the library. It generates a batch of
    /// suggestions, prints it immediately with every entry pending, then
    /// streams per-entry availability updates as the checks settle.
    ///
    /// # Errors
    ///
    /// Returns an error when the request options are invalid, when no
    /// credential is configured, or when the generation phase fails.
    /// Availability failures never error: they settle the affected entry as
    /// unknown and leave its siblings alone.
    pub async fn run_brainstorm(config: Opt) -> Result<BrainstormReport> {
        let options = RequestOptions {
            description: config.description.clone(),
            allowed_extensions: config.extensions.clone(),
            required_keyword: config.keyword.clone(),
            desired_count: config.count,
        }
        .validated()
        .context("invalid request options")?;

        let http =
            init_http_client(config.timeout_seconds).context("Failed to initialize HTTP client")?;
        let generator = Arc::new(GenerativeClient::from_env(http.clone())?);
        let start_time = std::time::Instant::now();

        if config.skip_availability {
            let suggestions = generator.generate(&options).await?;
            app::print_batch(&suggestions);
            return Ok(report_from(suggestions, start_time.elapsed().as_secs_f64()));
        }

        let base_url =
            Url::parse(AVAILABILITY_API_BASE).context("invalid availability endpoint")?;
        let checker = Arc::new(AvailabilityChecker::new(http, base_url));
        let stats = Arc::new(ProcessingStats::new());
        let orchestrator = Orchestrator::new(generator, checker, Arc::clone(&stats));

        let mut handle = orchestrator.submit(options).await?;
        let mut last = handle.updates.borrow().clone();
        app::print_batch(&last);

        while handle.updates.changed().await.is_ok() {
            let snapshot = handle.updates.borrow_and_update().clone();
            for (index, (old, new)) in last.iter().zip(snapshot.iter()).enumerate() {
                if old.availability != new.availability {
                    app::print_entry_update(index, new);
                }
            }
            last = snapshot;
        }

        app::print_check_statistics(&stats);
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        app::print_summary(&last, elapsed_seconds);

        Ok(report_from(last, elapsed_seconds))
    }
}
