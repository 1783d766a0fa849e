//! # Query Normalization
//!
//! Raw user input is reduced to a lowercase `[a-z0-9 ]` comparison key before
//! it reaches the FAQ matcher or the embedding provider. Both stages operate
//! on the same canonical text, so FAQ matching and search relevance agree on
//! what the query "is". The transform is lossy by design: punctuation,
//! accented letters, and emoji are deleted outright, favoring keyword overlap
//! over exact phrasing.

use crate::errors::ChatError;

/// Applies the lossy normalization transform: lowercase, strip every
/// character outside `[a-z0-9 ]`, and trim the result.
///
/// Idempotent: the output contains only characters the filter keeps and has
/// no edge whitespace, so a second application is a no-op.
pub fn normalize_text(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' '))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalizes a raw user query, rejecting input that is empty after trimming.
///
/// The emptiness check runs against the raw input, not the stripped output:
/// a query of pure punctuation normalizes to an empty string but is still a
/// well-formed request.
pub fn normalize_query(raw: &str) -> Result<String, ChatError> {
    if raw.trim().is_empty() {
        return Err(ChatError::EmptyQuery);
    }
    Ok(normalize_text(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips() {
        assert_eq!(
            normalize_text("What financing options do you offer?"),
            "what financing options do you offer"
        );
        assert_eq!(normalize_text("  Héllo, Wörld! 123 "), "hllo wrld 123");
        assert_eq!(normalize_text("🚗🚗🚗"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "What financing options do you offer?",
            "  MIXED case & Punct!!  ",
            "café crème",
            "a !",
            "42 models?!",
            "",
        ];
        for s in samples {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_query_rejects_empty() {
        assert!(matches!(normalize_query(""), Err(ChatError::EmptyQuery)));
        assert!(matches!(normalize_query("   \t\n"), Err(ChatError::EmptyQuery)));
    }

    #[test]
    fn test_normalize_query_accepts_punctuation_only_input() {
        // Not empty after trimming, so it passes validation even though the
        // normalized form is an empty string.
        assert_eq!(normalize_query("?!?").unwrap(), "");
    }
}
