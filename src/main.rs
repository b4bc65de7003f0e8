//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `domain_scout` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_scout::initialization::init_logger_with;
use domain_scout::{run_brainstorm, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present; the generative-service
    // credential is read from the environment, never from a flag.
    dotenvy::dotenv().ok();

    let config = Opt::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_brainstorm(config).await {
        Ok(report) => {
            println!(
                "✨ Generated {} suggestion{} ({} available, {} taken, {} unknown) in {:.1}s",
                report.suggestions.len(),
                if report.suggestions.len() == 1 { "" } else { "s" },
                report.available,
                report.taken,
                report.unknown,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_scout error: {:#}", e);
            process::exit(1);
        }
    }
}
