//! # Query Resolver
//!
//! The orchestrator for the chat pipeline. A query moves through a fixed
//! sequence of stages, each awaited before the next begins:
//!
//! 1. Validate and normalize the raw query.
//! 2. FAQ short-circuit: a hit returns immediately, before any network call.
//! 3. Embed the normalized query.
//! 4. Similarity search; an empty result maps to a fixed fallback answer
//!    instead of generating from an empty context.
//! 5. Compose the prompt and generate the answer.
//!
//! No stage retries, and errors from external calls propagate to the caller
//! as tagged [`ChatError`] values rather than degrading to a wrong answer.

use crate::{
    constants::{NO_INFORMATION_FALLBACK, TOP_K},
    errors::ChatError,
    faq::find_faq_answer,
    knowledge::KnowledgeBase,
    normalize::normalize_query,
    prompts::compose_answer_prompt,
    providers::{
        ai::{EmbeddingProvider, GenerationProvider},
        index::VectorIndexProvider,
    },
};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves user queries against the knowledge base and the configured
/// providers. Cheap to clone; all state is shared and read-only.
#[derive(Clone)]
pub struct QueryResolver {
    knowledge_base: Arc<KnowledgeBase>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    index_provider: Arc<dyn VectorIndexProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
}

impl QueryResolver {
    pub fn new(
        knowledge_base: Arc<KnowledgeBase>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index_provider: Arc<dyn VectorIndexProvider>,
        generation_provider: Arc<dyn GenerationProvider>,
    ) -> Self {
        Self {
            knowledge_base,
            embedding_provider,
            index_provider,
            generation_provider,
        }
    }

    /// Resolves a raw user query to an answer string.
    ///
    /// Every successful resolution produces *some* answer text, possibly
    /// empty, so callers never need a null-check branch. Failures are either
    /// validation errors (empty query) or upstream provider errors.
    pub async fn resolve(&self, query: &str) -> Result<String, ChatError> {
        let normalized = normalize_query(query)?;
        debug!(%normalized, "Normalized incoming query");

        // FAQ answers are deterministic and must cost zero network calls.
        if let Some(answer) = find_faq_answer(&normalized, &self.knowledge_base) {
            info!("FAQ short-circuit hit");
            return Ok(answer);
        }

        let query_vector = self.embedding_provider.embed(&normalized).await?;
        let matches = self.index_provider.search(&query_vector, TOP_K).await?;

        if matches.is_empty() {
            info!("Vector search returned no matches, using fallback answer");
            return Ok(NO_INFORMATION_FALLBACK.to_string());
        }
        debug!(match_count = matches.len(), "Retrieved context for generation");

        // The prompt carries the original question, not the normalized form.
        let prompt = compose_answer_prompt(&matches, query);
        let answer = self.generation_provider.generate(&prompt).await?;

        Ok(answer.trim().to_string())
    }
}
