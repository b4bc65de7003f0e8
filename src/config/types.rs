//! CLI option types and parsing.

use clap::{Parser, ValueEnum};

use super::constants::DEFAULT_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options.
///
/// The generative-service credential is deliberately not a flag; it is read
/// from the `GEMINI_API_KEY` (or `API_KEY`) environment variable, optionally
/// via a `.env` file.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_scout "online bakery in Jakarta"
///
/// # Restrict extensions and require a keyword
/// domain_scout "online bakery in Jakarta" --extensions .co.id,.store --keyword cake
///
/// # Ask for a specific number of suggestions
/// domain_scout "personal coding blog" --count 5
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_scout",
    about = "Generates domain name suggestions for a project description and checks their availability."
)]
pub struct Opt {
    /// Project description to brainstorm names for
    pub description: String,

    /// Comma-separated extension allow-list; each entry must start with '.'
    /// (e.g. `.com,.co.id`). Empty means the model picks from its default catalog.
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Keyword every suggested name part must contain verbatim
    #[arg(long)]
    pub keyword: Option<String>,

    /// Number of suggestions to request (1-20; out-of-range values fall back to 10)
    #[arg(long)]
    pub count: Option<usize>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Generate suggestions without checking availability
    #[arg(long)]
    pub skip_availability: bool,
}
