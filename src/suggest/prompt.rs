//! Instruction construction for the generative service.
//!
//! The instruction is the only "validator" of the suggestion format: it pins
//! the output to a bare JSON array and spells out the punctuation allowed at
//! the value boundary after the rationale string, which is the primary defense
//! against malformed output. Building it has no side effects.

use crate::config::DEFAULT_EXTENSION_CATALOG;

use super::types::ValidatedOptions;

/// Builds the full instruction text for one generation call.
///
/// The instruction stays in English regardless of the description language;
/// the model is told to mirror the description's language in each rationale.
pub fn build_prompt(options: &ValidatedOptions) -> String {
    let count = options.desired_count();
    let mut prompt = format!(
        "You are an expert domain name suggestion AI.\n\
         Based on the following user description, generate exactly {count} creative and relevant domain name suggestions:\n\
         \"{description}\"\n\n",
        description = options.description()
    );

    if options.allowed_extensions().is_empty() {
        prompt.push_str(&format!(
            "Consider these TLD options: {catalog}.\n\
             Match the TLD to the user's likely intent. For example:\n\
             - Online bakery in Jakarta: \"jakartabakery.co.id\", \"sweetreats.store\", \"cakecreations.id\".\n\
             - Personal coding blog (Indonesian audience): \"mycodejourney.my.id\", \"devdiary.id\", \"projectcode.space\".\n\
             - Global tech startup (social network): \"connectsphere.com\", \"sociatenow.net\", \"globalhub.site\".\n\n",
            catalog = DEFAULT_EXTENSION_CATALOG.join(", ")
        ));
    } else {
        prompt.push_str(&format!(
            "Only use these domain extensions: {allowed}.\n\
             Every suggestion's \"extension\" MUST be exactly one of them.\n\n",
            allowed = options.allowed_extensions().join(", ")
        ));
    }

    if let Some(keyword) = options.required_keyword() {
        prompt.push_str(&format!(
            "Every \"name\" MUST contain the keyword \"{keyword}\" verbatim, anywhere in the name part.\n\n"
        ));
    }

    prompt.push_str(
        "Provide your output ONLY as a JSON array of objects. Each object must have exactly three keys:\n\
         1. \"name\": (string) The domain name part (e.g., \"exampledomain\"). Must be lowercase alphanumeric. Hyphens are allowed but should be used sparingly. No other special characters or spaces.\n\
         2. \"extension\": (string) The domain extension, starting with a dot (e.g., \".com\").\n\
         3. \"meaning\": (string) A brief, one-sentence explanation (10-20 words) of the domain's relevance, written in the same language as the user description. THIS VALUE MUST BE PURE TEXT. NO EXTRA CHARACTERS, WORDS, OR COMMENTARY ARE ALLOWED AFTER THIS TEXT STRING AND BEFORE THE NEXT JSON TOKEN (A COMMA OR A CLOSING BRACE).\n\n",
    );

    prompt.push_str(&format!(
        "STRICT JSON OUTPUT RULES:\n\
         - Your entire response MUST start with '[' and end with ']'.\n\
         - No text, comments, explanations, or markdown formatting should appear anywhere outside this single JSON array.\n\
         - Inside each JSON object, after the \"meaning\" string value and its closing double quote (\"), there MUST be either a comma (,) if it's not the last object in the array, or a closing curly brace (}}) if it is the last property in an object. ABSOLUTELY NO OTHER TEXT OR CHARACTERS ARE PERMITTED IN THIS POSITION.\n\
         - The array must contain exactly {count} suggestions.\n\n"
    ));

    prompt.push_str(
        "Example of the exact JSON output format (YOUR RESPONSE MUST FOLLOW THIS STRUCTURE PRECISELY):\n\
         [\n  \
         { \"name\": \"exampledomain\", \"extension\": \".com\", \"meaning\": \"This domain is great for general examples.\" },\n  \
         { \"name\": \"youridea\", \"extension\": \".site\", \"meaning\": \"A versatile site for your unique idea.\" }\n\
         ]",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::RequestOptions;

    fn validated(options: RequestOptions) -> ValidatedOptions {
        options.validated().expect("options should validate")
    }

    fn base_options() -> RequestOptions {
        RequestOptions {
            description: "an online bakery in Jakarta".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requests_exact_count_for_all_valid_counts() {
        for count in 1..=20usize {
            let mut opts = base_options();
            opts.desired_count = Some(count);
            let prompt = build_prompt(&validated(opts));
            assert!(
                prompt.contains(&format!("generate exactly {} creative", count)),
                "prompt should request exactly {} suggestions",
                count
            );
            assert!(
                prompt.contains(&format!("exactly {} suggestions", count)),
                "output rules should repeat the exact count {}",
                count
            );
            assert!(
                !prompt.contains("at least"),
                "prompt must never ask for 'at least' N suggestions"
            );
        }
    }

    #[test]
    fn test_default_catalog_listed_when_no_allow_list() {
        let prompt = build_prompt(&validated(base_options()));
        for ext in DEFAULT_EXTENSION_CATALOG {
            assert!(prompt.contains(ext), "catalog should list {}", ext);
        }
        assert!(prompt.contains("Match the TLD to the user's likely intent"));
    }

    #[test]
    fn test_allow_list_restricts_extensions() {
        let mut opts = base_options();
        opts.allowed_extensions = vec![".co.id".to_string(), ".store".to_string()];
        let prompt = build_prompt(&validated(opts));
        assert!(prompt.contains("Only use these domain extensions: .co.id, .store"));
        assert!(prompt.contains("MUST be exactly one of them"));
        assert!(
            !prompt.contains("Consider these TLD options"),
            "the default catalog must not appear alongside an allow-list"
        );
    }

    #[test]
    fn test_keyword_clause_present_only_when_set() {
        let prompt = build_prompt(&validated(base_options()));
        assert!(!prompt.contains("verbatim"));

        let mut opts = base_options();
        opts.required_keyword = Some("cake".to_string());
        let prompt = build_prompt(&validated(opts));
        assert!(prompt.contains("MUST contain the keyword \"cake\" verbatim"));
    }

    #[test]
    fn test_description_embedded_verbatim() {
        let prompt = build_prompt(&validated(base_options()));
        assert!(prompt.contains("\"an online bakery in Jakarta\""));
    }

    #[test]
    fn test_output_contract_spelled_out() {
        let prompt = build_prompt(&validated(base_options()));
        assert!(prompt.contains("ONLY as a JSON array"));
        assert!(prompt.contains("MUST start with '[' and end with ']'"));
        assert!(prompt.contains("closing curly brace (})"));
    }
}
