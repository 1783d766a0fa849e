pub mod bedrock;

use crate::errors::ChatError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for turning text into a fixed-length embedding vector.
///
/// Exactly one production implementation exists; tests substitute a mock so
/// the pipeline can be exercised deterministically without network access.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug + DynClone {
    /// Embeds the given text. A single attempt, no retries; any transport or
    /// response-shape failure surfaces as an error to the caller.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ChatError>;
}

dyn_clone::clone_trait_object!(EmbeddingProvider);

/// A trait for generating answer text from a composed prompt.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the prompt. An empty response is valid; only
    /// transport and non-success failures are errors.
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}

dyn_clone::clone_trait_object!(GenerationProvider);
