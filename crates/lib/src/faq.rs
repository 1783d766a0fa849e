//! # FAQ Matcher
//!
//! A short-circuit lookup that runs before any external provider call. When a
//! user query matches a stored FAQ question, the canned answer is returned
//! directly, so FAQ answers are deterministic and cost no network round trips.

use crate::{constants::FAQ_CATEGORY, knowledge::KnowledgeBase, normalize::normalize_text};

/// Looks up a normalized query against the FAQ-tagged documents.
///
/// A document matches when the normalized first line of its `text` (the
/// stored question) contains the normalized query as a substring; the first
/// match in collection order wins. Substring containment lets short or
/// partial user phrasing match a longer canonical question without fuzzy
/// matching infrastructure.
///
/// Returns `None` when no FAQ document matches, signalling the caller to
/// proceed to retrieval. A matched document with no `Answer:` marker yields
/// an empty answer string, which is a valid result rather than an error.
pub fn find_faq_answer(normalized_query: &str, knowledge_base: &KnowledgeBase) -> Option<String> {
    knowledge_base
        .documents()
        .iter()
        .filter(|doc| doc.metadata.category.as_deref() == Some(FAQ_CATEGORY))
        .find(|doc| {
            let question = doc.text.lines().next().unwrap_or_default();
            normalize_text(question).contains(normalized_query)
        })
        .map(|doc| extract_answer(&doc.text))
}

/// Returns everything after the first case-insensitive `Answer:` marker,
/// trimmed, or an empty string when the marker is absent.
fn extract_answer(text: &str) -> String {
    const MARKER: &[u8] = b"answer:";
    text.as_bytes()
        .windows(MARKER.len())
        .position(|window| window.eq_ignore_ascii_case(MARKER))
        .map(|pos| text[pos + MARKER.len()..].trim().to_string())
        .unwrap_or_default()
}
