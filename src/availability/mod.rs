//! Domain availability lookup with bounded retry.
//!
//! Transport-level failures (non-2xx status, connection errors, undecodable
//! payloads) are retried with linear backoff, up to three attempts total. A
//! well-formed payload that reports `success: false` is authoritative and is
//! never retried: the service *answered*, it just could not determine
//! availability. The checker resolves every code path to a value so one
//! candidate's failure can never abort sibling checks.

mod types;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio_retry::Retry;
use url::Url;

use crate::config::{LOOKUP_MAX_ATTEMPTS, LOOKUP_RETRY_BASE_DELAY};

pub use types::{Availability, AvailabilityResult};
use types::LookupPayload;

/// Seam between the orchestrator and the lookup service.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync {
    /// Checks one fully-qualified domain. Never fails: every code path
    /// resolves to an [`AvailabilityResult`].
    async fn check(&self, full_name: &str) -> AvailabilityResult;
}

/// One failed lookup attempt. All variants are transport-level and eligible
/// for retry; payload-level failures never become errors.
#[derive(Error, Debug)]
enum LookupError {
    #[error("lookup service responded with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl LookupError {
    /// True when the attempt never reached the service.
    fn is_connectivity(&self) -> bool {
        match self {
            LookupError::Status(_) => false,
            LookupError::Transport(e) => e.is_connect() || e.is_timeout(),
        }
    }
}

/// Linear backoff: the wait after attempt `k` is `k * base`.
fn linear_backoff(base: Duration, max_attempts: u32) -> impl Iterator<Item = Duration> {
    (1..max_attempts).map(move |k| base * k)
}

/// Checker against the availability lookup service.
pub struct AvailabilityChecker {
    http: reqwest::Client,
    base_url: Url,
    max_attempts: u32,
    retry_base_delay: Duration,
}

impl AvailabilityChecker {
    /// Creates a checker with the default retry policy (3 attempts, linear
    /// backoff from one second).
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        AvailabilityChecker {
            http,
            base_url,
            max_attempts: LOOKUP_MAX_ATTEMPTS,
            retry_base_delay: LOOKUP_RETRY_BASE_DELAY,
        }
    }

    /// Overrides the retry policy. `max_attempts` is the total attempt count
    /// including the first one and must be at least 1.
    pub fn with_retry_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_base_delay = base_delay;
        self
    }

    /// One lookup attempt against the service.
    async fn attempt(&self, full_name: &str) -> Result<LookupPayload, LookupError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("domain", full_name);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(response.json::<LookupPayload>().await?)
    }

    fn exhausted_reason(&self, full_name: &str, err: &LookupError) -> String {
        let attempts = self.max_attempts;
        match err {
            LookupError::Status(status) => format!(
                "Availability service error (status {status}) for {full_name} after {attempts} attempts."
            ),
            transport if transport.is_connectivity() => format!(
                "Could not connect to the availability service for {full_name} after {attempts} attempts. \
                 This may be due to a network issue, the service being temporarily unavailable, or \
                 cross-origin restrictions on the service endpoint. (Detail: {transport})"
            ),
            other => format!(
                "Availability check for {full_name} failed after {attempts} attempts. (Detail: {other})"
            ),
        }
    }
}

#[async_trait]
impl AvailabilityLookup for AvailabilityChecker {
    async fn check(&self, full_name: &str) -> AvailabilityResult {
        log::debug!("checking availability of {full_name}");

        let counter = Arc::new(AtomicU32::new(0));
        let strategy = linear_backoff(self.retry_base_delay, self.max_attempts);

        let result = Retry::spawn(strategy, {
            let counter = Arc::clone(&counter);
            move || {
                let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    match self.attempt(full_name).await {
                        Ok(payload) => Ok(payload),
                        Err(err) => {
                            log::warn!(
                                "availability attempt {attempt}/{max} failed for {full_name}: {err}",
                                max = self.max_attempts
                            );
                            Err(err)
                        }
                    }
                }
            }
        })
        .await;

        let attempts = counter.load(Ordering::SeqCst);

        match result {
            Ok(payload) if payload.success => {
                log::debug!(
                    "{full_name} is {}",
                    if payload.available { "available" } else { "taken" }
                );
                AvailabilityResult::determined(payload.available, attempts)
            }
            // The service answered but could not determine availability.
            // Authoritative, so no retry happened and none is warranted.
            Ok(payload) => {
                let reason = payload
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| {
                        format!("lookup service reported an unsuccessful operation for {full_name}")
                    });
                log::warn!("availability of {full_name} is indeterminate: {reason}");
                AvailabilityResult::indeterminate(reason, attempts)
            }
            Err(err) => {
                let reason = self.exhausted_reason(full_name, &err);
                log::error!("{reason}");
                AvailabilityResult::indeterminate(reason, attempts)
            }
        }
    }
}
