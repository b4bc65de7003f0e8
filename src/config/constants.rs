//! Configuration constants.

use std::time::Duration;

/// Environment variable holding the generative-service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Legacy credential variable, consulted when [`API_KEY_ENV`] is unset.
pub const API_KEY_ENV_FALLBACK: &str = "API_KEY";

/// Base endpoint of the generative-language REST API.
pub const GENERATIVE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for suggestion generation.
pub const GENERATIVE_MODEL: &str = "gemini-2.5-flash";
/// Sampling temperature for suggestion generation.
pub const GENERATION_TEMPERATURE: f64 = 0.7;

/// Base endpoint of the availability lookup service.
/// The fully-qualified domain is passed via the `domain` query parameter.
pub const AVAILABILITY_API_BASE: &str = "https://whois.webkulo.com/";

/// Maximum lookup attempts per domain (initial attempt plus retries).
pub const LOOKUP_MAX_ATTEMPTS: u32 = 3;
/// Base delay of the linear retry backoff: after attempt `k` the checker
/// waits `k * LOOKUP_RETRY_BASE_DELAY` before the next attempt.
pub const LOOKUP_RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);

// Requested suggestion count bounds
pub const MIN_SUGGESTION_COUNT: usize = 1;
pub const MAX_SUGGESTION_COUNT: usize = 20;
/// Fallback when the requested count is absent or out of range.
pub const DEFAULT_SUGGESTION_COUNT: usize = 10;

/// Default per-request HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Extensions offered to the model when the user supplies no allow-list,
/// spanning general commercial, Indonesian personal/commercial, e-commerce,
/// community/creative, entertainment, and generic intents.
pub const DEFAULT_EXTENSION_CATALOG: &[&str] = &[
    ".com", ".net", ".my.id", ".id", ".co.id", ".store", ".site", ".space", ".fun", ".sbs", ".top",
];

/// Registrar cart endpoint used to build per-suggestion purchase links.
pub const REGISTRAR_CART_URL: &str =
    "https://nyanhosting.id/member/cart.php?a=add&domain=register&query=";

/// User-Agent header value for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_scout/", env!("CARGO_PKG_VERSION"));
