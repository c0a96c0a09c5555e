use crate::features::ai::dto::GenerateContentResponse;

pub const FALLBACK_ANSWER: &str = "Unknown";

pub fn build_prompt(question: &str) -> String {
    format!("Answer in one word only: {question}")
}

/// Reduces a model reply to its first whitespace-delimited token, falling
/// back to [`FALLBACK_ANSWER`] when the reply has no text at all. A
/// whitespace-only reply yields an empty token.
pub fn extract_one_word(response: &GenerateContentResponse) -> String {
    let Some(text) = response.first_text().filter(|text| !text.is_empty()) else {
        tracing::warn!(
            candidates = response.candidates.len(),
            finish_reason = response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.as_deref())
                .unwrap_or("none"),
            "generateContent response had no text part"
        );
        return FALLBACK_ANSWER.to_string();
    };

    match text.split_whitespace().next() {
        Some(word) => word.to_string(),
        None => {
            tracing::warn!("generateContent returned whitespace-only text");
            String::new()
        }
    }
}
