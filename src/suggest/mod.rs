//! Suggestion acquisition: options, prompt construction, response parsing,
//! and the generative service client.

mod client;
mod parse;
mod prompt;
mod types;

// Re-export public API
pub use client::{GenerativeClient, SuggestionGenerator};
pub use parse::parse_suggestions;
pub use prompt::build_prompt;
pub use types::{
    AvailabilityState, OptionsError, RequestOptions, Suggestion, ValidatedOptions,
};
