//! Suggestion data model and request options.

use thiserror::Error;

use crate::config::{
    DEFAULT_SUGGESTION_COUNT, MAX_SUGGESTION_COUNT, MIN_SUGGESTION_COUNT, REGISTRAR_CART_URL,
};

/// Availability of one candidate domain.
///
/// Transitions monotonically from `Pending` to exactly one terminal state and
/// never reverts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityState {
    /// The lookup has not settled yet.
    Pending,
    /// The lookup service reported the domain as unregistered.
    Available,
    /// The lookup service reported the domain as already registered.
    Unavailable,
    /// The lookup could not determine availability; carries the reason.
    Unknown {
        /// Human-readable explanation of why the lookup was inconclusive.
        reason: String,
    },
}

impl AvailabilityState {
    /// Whether this state is terminal (anything but `Pending`).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AvailabilityState::Pending)
    }
}

/// One candidate domain produced by the generative service.
///
/// The name part and extension are immutable once the suggestion is created;
/// only the availability state changes, exactly once, when its own lookup
/// settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    name_part: String,
    extension: String,
    rationale: String,
    /// Current availability of the candidate.
    pub availability: AvailabilityState,
}

impl Suggestion {
    /// Creates a pending suggestion.
    pub fn new(
        name_part: impl Into<String>,
        extension: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Suggestion {
            name_part: name_part.into(),
            extension: extension.into(),
            rationale: rationale.into(),
            availability: AvailabilityState::Pending,
        }
    }

    /// The name part, without extension (e.g. `exampledomain`).
    pub fn name_part(&self) -> &str {
        &self.name_part
    }

    /// The extension, starting with a dot (e.g. `.co.id`).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// One-sentence, whitespace-collapsed rationale for the candidate.
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// The fully-qualified domain string, e.g. `example` + `.com` → `example.com`.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name_part, self.extension)
    }

    /// Registrar deep-link for purchasing this candidate.
    pub fn registration_url(&self) -> String {
        let mut url = String::from(REGISTRAR_CART_URL);
        url.extend(url::form_urlencoded::byte_serialize(
            self.full_name().as_bytes(),
        ));
        url
    }
}

/// Rejected [`RequestOptions`] input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// The project description is empty or whitespace-only.
    #[error("description must not be empty")]
    EmptyDescription,

    /// An allow-list entry is not a plausible extension.
    #[error("invalid extension {0:?}: must start with '.' and name a TLD")]
    InvalidExtension(String),
}

/// User-tunable generation constraints, as collected from the caller.
///
/// Validate with [`RequestOptions::validated`] before use; the prompt builder
/// only accepts [`ValidatedOptions`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Free-text project description.
    pub description: String,
    /// Extension allow-list; empty means no restriction.
    pub allowed_extensions: Vec<String>,
    /// Keyword every generated name part must contain verbatim.
    pub required_keyword: Option<String>,
    /// Desired suggestion count; `None` or out-of-range falls back to 10.
    pub desired_count: Option<usize>,
}

impl RequestOptions {
    /// Validates the options.
    ///
    /// - the description must be non-empty after trimming;
    /// - every allow-list entry must start with `.` and have length > 1
    ///   (duplicates are dropped, order preserved);
    /// - a blank keyword is treated as absent;
    /// - a count outside 1..=20 falls back to the default of 10.
    pub fn validated(self) -> Result<ValidatedOptions, OptionsError> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(OptionsError::EmptyDescription);
        }

        let mut allowed_extensions: Vec<String> = Vec::new();
        for raw in &self.allowed_extensions {
            let ext = raw.trim();
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(OptionsError::InvalidExtension(raw.clone()));
            }
            if !allowed_extensions.iter().any(|e| e == ext) {
                allowed_extensions.push(ext.to_string());
            }
        }

        let required_keyword = self
            .required_keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let desired_count = match self.desired_count {
            Some(n) if (MIN_SUGGESTION_COUNT..=MAX_SUGGESTION_COUNT).contains(&n) => n,
            Some(n) => {
                log::warn!(
                    "requested suggestion count {} is outside {}..={}, using default {}",
                    n,
                    MIN_SUGGESTION_COUNT,
                    MAX_SUGGESTION_COUNT,
                    DEFAULT_SUGGESTION_COUNT
                );
                DEFAULT_SUGGESTION_COUNT
            }
            None => DEFAULT_SUGGESTION_COUNT,
        };

        Ok(ValidatedOptions {
            description,
            allowed_extensions,
            required_keyword,
            desired_count,
        })
    }
}

/// Generation constraints after validation.
///
/// The count is guaranteed in range, so the prompt builder can never emit an
/// out-of-range count into its instruction.
#[derive(Debug, Clone)]
pub struct ValidatedOptions {
    description: String,
    allowed_extensions: Vec<String>,
    required_keyword: Option<String>,
    desired_count: usize,
}

impl ValidatedOptions {
    /// The trimmed project description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The deduplicated extension allow-list; empty means no restriction.
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// The required keyword, if any.
    pub fn required_keyword(&self) -> Option<&str> {
        self.required_keyword.as_deref()
    }

    /// The effective suggestion count, always within 1..=20.
    pub fn desired_count(&self) -> usize {
        self.desired_count
    }
}
