//! Generative service client.
//!
//! Owns the session with the generative-language REST endpoint and converts
//! its response into raw text for the parser. Error kinds are decided here,
//! at the HTTP boundary, and carried as typed values; callers never re-derive
//! them from message text. This client performs no retry: retrying is a
//! property of the availability checker, not of generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{
    API_KEY_ENV, API_KEY_ENV_FALLBACK, GENERATION_TEMPERATURE, GENERATIVE_API_BASE,
    GENERATIVE_MODEL,
};
use crate::error_handling::SuggestError;

use super::parse::parse_suggestions;
use super::prompt::build_prompt;
use super::types::{Suggestion, ValidatedOptions};

/// Marker the service embeds in authentication-rejection bodies.
const INVALID_KEY_MARKER: &str = "API key not valid";

/// Maximum length of an upstream body quoted in an error message.
const MAX_ERROR_BODY_LEN: usize = 200;

/// Seam between the orchestrator and the generative service.
#[async_trait]
pub trait SuggestionGenerator: Send + Sync {
    /// Produces one batch of pending suggestions for the given options.
    async fn generate(&self, options: &ValidatedOptions)
        -> Result<Vec<Suggestion>, SuggestError>;
}

/// Client for the generative-language REST endpoint.
///
/// Constructed explicitly and passed to the orchestrator; there is no global
/// client handle. Missing credentials surface at construction time as
/// [`SuggestError::NotConfigured`], so no call ever reaches the network
/// without one.
pub struct GenerativeClient {
    http: reqwest::Client,
    base_url: Url,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_LEN {
        return trimmed.to_string();
    }
    let prefix: String = trimmed.chars().take(MAX_ERROR_BODY_LEN).collect();
    format!("{prefix}...")
}

impl GenerativeClient {
    /// Creates a client against the production endpoint, reading the
    /// credential from `GEMINI_API_KEY` (or the legacy `API_KEY`).
    pub fn from_env(http: reqwest::Client) -> Result<Self, SuggestError> {
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_ENV_FALLBACK))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(SuggestError::NotConfigured(API_KEY_ENV))?;
        Self::new(http, GENERATIVE_API_BASE, GENERATIVE_MODEL, api_key)
    }

    /// Creates a client against an explicit endpoint. Used directly by tests;
    /// production code goes through [`GenerativeClient::from_env`].
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        model: &str,
        api_key: String,
    ) -> Result<Self, SuggestError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SuggestError::ServiceError(format!("invalid endpoint {base_url}: {e}")))?;
        Ok(GenerativeClient {
            http,
            base_url,
            model: model.to_string(),
            api_key,
        })
    }

    fn generate_url(&self) -> Url {
        let path = format!(
            "{}/models/{}:generateContent",
            self.base_url.path().trim_end_matches('/'),
            self.model
        );
        let mut url = self.base_url.clone();
        url.set_path(&path);
        url
    }
}

#[async_trait]
impl SuggestionGenerator for GenerativeClient {
    async fn generate(
        &self,
        options: &ValidatedOptions,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        let prompt = build_prompt(options);
        log::debug!(
            "requesting {} suggestions from model {}",
            options.desired_count(),
            self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
                response_mime_type: "application/json",
            },
        };

        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestError::ServiceError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Authentication rejections arrive as 400/403 with a marker in the
            // body; classify once here so downstream code never string-matches.
            if body.contains(INVALID_KEY_MARKER) {
                log::warn!("generative service rejected the configured API key");
                return Err(SuggestError::InvalidCredential(truncate_body(&body)));
            }
            return Err(SuggestError::ServiceError(format!(
                "HTTP {status}: {}",
                truncate_body(&body)
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::ServiceError(format!("undecodable response: {e}")))?;

        let text: String = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(SuggestError::EmptyResponse);
        }

        let suggestions = parse_suggestions(&text)?;
        log::info!("generative service returned {} suggestions", suggestions.len());
        Ok(suggestions)
    }
}
