//! # Prompt Composition
//!
//! Deterministic rendering of retrieved context and the user's question into
//! the single instruction string sent to the generation provider. No
//! truncation or token budgeting is applied; if the assembled context exceeds
//! the generator's input limit, that is a configuration concern upstream.

use crate::{constants::CONTEXT_SEPARATOR, providers::index::RetrievalMatch};

/// The role and instruction preamble for answer generation.
pub const ANSWER_SYSTEM_PREAMBLE: &str = "You are a knowledgeable assistant. Use the following information to answer the user's question.
Do not mention snippet numbers or refer to “document snippets.” Just give a concise, user‐friendly answer.
If you don't know, say “I'm sorry, I don't know that.”";

/// Renders retrieved matches and the raw user question into a prompt with
/// four fixed sections: preamble, numbered context snippets, the literal
/// question, and an `ANSWER:` cue for the generator.
///
/// Snippets are 1-indexed in retrieval order and carry each match's
/// `metadata.content`. The question is the original user text, not the
/// normalized form, so the generator sees the user's own phrasing.
pub fn compose_answer_prompt(matches: &[RetrievalMatch], question: &str) -> String {
    let context = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!("({}) {}", i + 1, m.metadata.content.as_deref().unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR);

    format!(
        "{ANSWER_SYSTEM_PREAMBLE}\n\n--- DOCUMENTS:\n{context}\n\n--- USER QUESTION:\n{question}\n\n--- ANSWER:\n"
    )
    .trim()
    .to_string()
}
