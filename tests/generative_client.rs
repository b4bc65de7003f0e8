//! Integration tests for the generative service client.
//!
//! A mock server stands in for the generative-language endpoint; the tests
//! pin down the request contract (single call, JSON response hint, exact
//! prompt) and the typed error mapping at the HTTP boundary.

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use domain_scout::suggest::{
    build_prompt, GenerativeClient, RequestOptions, SuggestionGenerator, ValidatedOptions,
};
use domain_scout::{ErrorType, SuggestError};

const MODEL: &str = "test-model";
const GENERATE_PATH: &str = "/models/test-model:generateContent";

fn client_for(server: &Server) -> GenerativeClient {
    let base = server.url("/").to_string();
    GenerativeClient::new(
        reqwest::Client::new(),
        base.trim_end_matches('/'),
        MODEL,
        "test-key".to_string(),
    )
    .expect("client should construct")
}

fn options() -> ValidatedOptions {
    RequestOptions {
        description: "an online bakery in Jakarta".to_string(),
        ..Default::default()
    }
    .validated()
    .expect("options should validate")
}

/// Wraps suggestion-array text the way the service returns it.
fn service_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

const SUGGESTIONS_JSON: &str = r#"[
    { "name": "jakartabakery", "extension": ".co.id", "meaning": "A bakery in Jakarta." },
    { "name": "sweetreats", "extension": ".store", "meaning": "An online store for sweet treats." }
]"#;

/// One generate call issues exactly one request carrying the built prompt,
/// the JSON response hint, and temperature 0.7, and returns the parsed batch.
#[tokio::test]
async fn test_generate_sends_exact_request_and_parses_batch() {
    let server = Server::run();
    let expected_body = json!({
        "contents": [ { "parts": [ { "text": build_prompt(&options()) } ] } ],
        "generationConfig": {
            "temperature": 0.7,
            "responseMimeType": "application/json"
        }
    });
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", GENERATE_PATH),
            request::body(json_decoded(eq(expected_body))),
        ])
        .times(1)
        .respond_with(json_encoded(service_response(SUGGESTIONS_JSON))),
    );

    let client = client_for(&server);
    let suggestions = client.generate(&options()).await.expect("should succeed");

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].full_name(), "jakartabakery.co.id");
    assert_eq!(suggestions[1].full_name(), "sweetreats.store");
}

/// A fenced response body parses the same as an unfenced one.
#[tokio::test]
async fn test_generate_accepts_fenced_payload() {
    let server = Server::run();
    let fenced = format!("```json\n{SUGGESTIONS_JSON}\n```");
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .respond_with(json_encoded(service_response(&fenced))),
    );

    let client = client_for(&server);
    let suggestions = client.generate(&options()).await.expect("should succeed");
    assert_eq!(suggestions.len(), 2);
}

/// An authentication rejection maps to `InvalidCredential`, decided once at
/// the HTTP boundary.
#[tokio::test]
async fn test_rejected_key_is_invalid_credential() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .times(1)
            .respond_with(status_code(400).body(
                r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#,
            )),
    );

    let client = client_for(&server);
    let err = client.generate(&options()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorType::InvalidCredential);
}

/// Any other non-success status maps to `ServiceError` and is not retried.
#[tokio::test]
async fn test_server_error_is_service_error_without_retry() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .times(1)
            .respond_with(status_code(503).body("upstream overloaded")),
    );

    let client = client_for(&server);
    let err = client.generate(&options()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorType::ServiceError);
    assert!(err.to_string().contains("503"), "got: {err}");
}

/// A response without candidate text fails with `EmptyResponse`.
#[tokio::test]
async fn test_missing_candidate_text_is_empty_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .respond_with(json_encoded(json!({ "candidates": [] }))),
    );

    let client = client_for(&server);
    let err = client.generate(&options()).await.unwrap_err();
    assert!(matches!(err, SuggestError::EmptyResponse));
}

/// Malformed suggestion text propagates the parser's typed error.
#[tokio::test]
async fn test_unparseable_text_is_malformed_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .respond_with(json_encoded(service_response("this is not json"))),
    );

    let client = client_for(&server);
    let err = client.generate(&options()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorType::MalformedResponse);
}

/// A parsed-but-non-array payload is an `UnexpectedShape` failure.
#[tokio::test]
async fn test_non_array_text_is_unexpected_shape() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", GENERATE_PATH))
            .respond_with(json_encoded(service_response(r#"{"a": 1}"#))),
    );

    let client = client_for(&server);
    let err = client.generate(&options()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorType::UnexpectedShape);
}
