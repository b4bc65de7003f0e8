//! Availability lookup data structures.

use serde::Deserialize;

/// Tri-state availability as determined by one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The service reported the domain as unregistered.
    Available,
    /// The service reported the domain as already registered.
    Taken,
    /// Availability could not be determined.
    Indeterminate,
}

/// Outcome of one availability lookup. Write-once; it has no identity beyond
/// the suggestion it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    /// The determined availability.
    pub availability: Availability,
    /// Human-readable reason, present only when indeterminate.
    pub failure_reason: Option<String>,
    /// Number of lookup attempts actually made.
    pub attempts: u32,
}

impl AvailabilityResult {
    /// A determinate result, straight from the service's `available` flag.
    pub fn determined(available: bool, attempts: u32) -> Self {
        AvailabilityResult {
            availability: if available {
                Availability::Available
            } else {
                Availability::Taken
            },
            failure_reason: None,
            attempts,
        }
    }

    /// An indeterminate result carrying the reason the lookup failed.
    pub fn indeterminate(reason: impl Into<String>, attempts: u32) -> Self {
        AvailabilityResult {
            availability: Availability::Indeterminate,
            failure_reason: Some(reason.into()),
            attempts,
        }
    }
}

/// Wire payload returned by the lookup service.
///
/// `available` is only meaningful when `success` is true; `message` is
/// populated on payload-level failures.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupPayload {
    pub success: bool,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub message: Option<String>,
}
