//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client.
///
/// One client serves both external services; reqwest clients hold an internal
/// connection pool and are cheap to clone. The timeout doubles as the
/// per-attempt hardening bound of the availability checker.
///
/// # Errors
///
/// Returns [`InitializationError::HttpClientError`] if client creation fails.
pub fn init_http_client(timeout_seconds: u64) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
