//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of the suggestion-generation pipeline.
///
/// This taxonomy is part of the crate's public surface; callers map each kind
/// to a user-facing message. Availability lookups never produce these: an
/// undeterminable lookup is a value ([`crate::availability::Availability::Indeterminate`]),
/// not an error, so one candidate's failure can never abort its siblings.
#[derive(Error, Debug)]
pub enum SuggestError {
    /// No credential is configured. Fatal for the whole session; every call
    /// fails fast without network I/O.
    #[error("generative service credential is not configured (set {0})")]
    NotConfigured(&'static str),

    /// The service rejected the configured credential.
    #[error("generative service rejected the API key: {0}")]
    InvalidCredential(String),

    /// The service answered without any text to parse.
    #[error("generative service returned an empty response")]
    EmptyResponse,

    /// The response text is not parseable JSON.
    #[error("response is not valid JSON: {0}")]
    MalformedResponse(String),

    /// The response parsed but violates the required record shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Opaque upstream failure; the message is passed through.
    #[error("generative service error: {0}")]
    ServiceError(String),
}

impl SuggestError {
    /// The statistics counter key for this error.
    pub fn kind(&self) -> ErrorType {
        match self {
            SuggestError::NotConfigured(_) => ErrorType::NotConfigured,
            SuggestError::InvalidCredential(_) => ErrorType::InvalidCredential,
            SuggestError::EmptyResponse => ErrorType::EmptyResponse,
            SuggestError::MalformedResponse(_) => ErrorType::MalformedResponse,
            SuggestError::UnexpectedShape(_) => ErrorType::UnexpectedShape,
            SuggestError::ServiceError(_) => ErrorType::ServiceError,
        }
    }
}

/// Counter keys for generation-phase failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    NotConfigured,
    InvalidCredential,
    EmptyResponse,
    MalformedResponse,
    UnexpectedShape,
    ServiceError,
}

/// Counter keys for availability-check outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    Available,
    Taken,
    Indeterminate,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NotConfigured => "Credential not configured",
            ErrorType::InvalidCredential => "Credential rejected",
            ErrorType::EmptyResponse => "Empty service response",
            ErrorType::MalformedResponse => "Malformed service response",
            ErrorType::UnexpectedShape => "Unexpected response shape",
            ErrorType::ServiceError => "Generative service error",
        }
    }
}

impl OutcomeType {
    /// Returns a human-readable string representation of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Available => "Available",
            OutcomeType::Taken => "Taken",
            OutcomeType::Indeterminate => "Availability unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::InvalidCredential.as_str(),
            "Credential rejected"
        );
        assert_eq!(
            ErrorType::MalformedResponse.as_str(),
            "Malformed service response"
        );
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_all_outcome_types_have_string_representation() {
        for outcome in OutcomeType::iter() {
            assert!(
                !outcome.as_str().is_empty(),
                "{:?} should have non-empty string",
                outcome
            );
        }
    }

    #[test]
    fn test_suggest_error_kind_mapping() {
        assert_eq!(
            SuggestError::NotConfigured("GEMINI_API_KEY").kind(),
            ErrorType::NotConfigured
        );
        assert_eq!(SuggestError::EmptyResponse.kind(), ErrorType::EmptyResponse);
        assert_eq!(
            SuggestError::UnexpectedShape("suggestion at index 2".into()).kind(),
            ErrorType::UnexpectedShape
        );
    }

    #[test]
    fn test_suggest_error_messages_name_the_kind() {
        let err = SuggestError::NotConfigured("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let err = SuggestError::ServiceError("HTTP 503".into());
        assert!(err.to_string().contains("HTTP 503"));
    }
}
