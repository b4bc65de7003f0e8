//! Strict parsing of the generative service's suggestion payload.
//!
//! Parsing is all-or-nothing: a single invalid element invalidates the whole
//! batch. The name part and extension are stored verbatim (the instruction is
//! their only validator); the rationale is whitespace-normalized.

use serde_json::Value;

use crate::error_handling::SuggestError;

use super::types::Suggestion;

/// Strips a whole-text triple-backtick fence, with an optional language tag
/// on the opening line. Text that is not entirely fenced is returned trimmed.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() < 6 || !trimmed.starts_with("```") || !trimmed.ends_with("```") {
        return trimmed;
    }
    let inner = &trimmed[3..trimmed.len() - 3];
    let inner = match inner.split_once('\n') {
        // A fence tag is a single word (possibly empty) on the opening line.
        Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
        _ => inner,
    };
    inner.trim()
}

/// Collapses runs of whitespace to one space and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn shape_error(index: usize) -> SuggestError {
    SuggestError::UnexpectedShape(format!(
        "suggestion at index {index} has missing or invalid fields"
    ))
}

/// Parses raw response text into a batch of pending suggestions.
///
/// The text may be wrapped in a markdown code fence; anything else around the
/// JSON array is an error. Every element must be an object with string-typed
/// `name`, `extension`, and `meaning` keys.
pub fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, SuggestError> {
    let text = strip_code_fence(raw);

    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| SuggestError::MalformedResponse(e.to_string()))?;

    let Value::Array(items) = parsed else {
        return Err(SuggestError::UnexpectedShape(
            "expected a JSON array of suggestion objects".to_string(),
        ));
    };

    let mut suggestions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = item.as_object().ok_or_else(|| shape_error(index))?;
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| shape_error(index))?;
        let extension = record
            .get("extension")
            .and_then(Value::as_str)
            .ok_or_else(|| shape_error(index))?;
        let meaning = record
            .get("meaning")
            .and_then(Value::as_str)
            .ok_or_else(|| shape_error(index))?;

        suggestions.push(Suggestion::new(
            name,
            extension,
            collapse_whitespace(meaning),
        ));
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use crate::suggest::AvailabilityState;

    const VALID: &str = r#"[
        { "name": "jakartabakery", "extension": ".co.id", "meaning": "A bakery in Jakarta." },
        { "name": "sweetreats", "extension": ".store", "meaning": "An online store for sweet treats." }
    ]"#;

    #[test]
    fn test_round_trip_valid_array() {
        let suggestions = parse_suggestions(VALID).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name_part(), "jakartabakery");
        assert_eq!(suggestions[0].extension(), ".co.id");
        assert_eq!(suggestions[0].rationale(), "A bakery in Jakarta.");
        assert!(suggestions
            .iter()
            .all(|s| s.availability == AvailabilityState::Pending));
    }

    #[test]
    fn test_fenced_input_matches_unfenced() {
        let fenced = format!("```json\n{VALID}\n```");
        assert_eq!(
            parse_suggestions(&fenced).unwrap(),
            parse_suggestions(VALID).unwrap()
        );

        let untagged = format!("```\n{VALID}\n```");
        assert_eq!(
            parse_suggestions(&untagged).unwrap(),
            parse_suggestions(VALID).unwrap()
        );
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parse_suggestions("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorType::MalformedResponse);
    }

    #[test]
    fn test_non_array_is_unexpected_shape() {
        let err = parse_suggestions(r#"{"a":1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorType::UnexpectedShape);
    }

    #[test]
    fn test_invalid_element_reports_index() {
        let input = r#"[
            { "name": "good", "extension": ".com", "meaning": "Fine." },
            { "name": "bad", "extension": 42, "meaning": "Extension is not a string." }
        ]"#;
        let err = parse_suggestions(input).unwrap_err();
        assert_eq!(err.kind(), ErrorType::UnexpectedShape);
        assert!(
            err.to_string().contains("index 1"),
            "error should name the offending index, got: {err}"
        );
    }

    #[test]
    fn test_single_bad_element_invalidates_whole_batch() {
        let input = r#"[
            { "name": "good", "extension": ".com", "meaning": "Fine." },
            "not an object"
        ]"#;
        assert!(parse_suggestions(input).is_err());
    }

    #[test]
    fn test_meaning_whitespace_collapsed() {
        let input = r#"[
            { "name": "spaced", "extension": ".com", "meaning": "  too \n\n  many\tspaces  " }
        ]"#;
        let suggestions = parse_suggestions(input).unwrap();
        assert_eq!(suggestions[0].rationale(), "too many spaces");
    }

    #[test]
    fn test_name_and_extension_stored_verbatim() {
        // The parser performs no sanitization beyond the rationale collapse;
        // the upstream instruction is the format's only validator.
        let input = r#"[
            { "name": "Weird-Name", "extension": "com", "meaning": "Kept as-is." }
        ]"#;
        let suggestions = parse_suggestions(input).unwrap();
        assert_eq!(suggestions[0].name_part(), "Weird-Name");
        assert_eq!(suggestions[0].extension(), "com");
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_suggestions("[]").unwrap().is_empty());
    }

    #[test]
    fn test_fence_without_trailing_newline() {
        let fenced = format!("```json\n{VALID}```");
        assert_eq!(
            parse_suggestions(&fenced).unwrap(),
            parse_suggestions(VALID).unwrap()
        );
    }
}
