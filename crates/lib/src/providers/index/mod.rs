pub mod pinecone;

use crate::errors::ChatError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Metadata stored alongside a vector index entry and returned with matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A scored document returned by a similarity search, ordered descending by
/// relevance score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalMatch {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub metadata: MatchMetadata,
}

/// A vector plus metadata to store in the index during ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: MatchMetadata,
}

/// A trait for interacting with an external vector similarity index.
///
/// The index itself is delegated to an external provider; this crate does no
/// indexing, ranking, or caching of its own.
#[async_trait]
pub trait VectorIndexProvider: Send + Sync + Debug + DynClone {
    /// Returns the `top_k` nearest entries to the query vector with their
    /// stored metadata. An empty result is valid and signals "no relevant
    /// information" rather than a failure.
    async fn search(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievalMatch>, ChatError>;

    /// Stores entries in the index, overwriting any with the same id.
    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), ChatError>;
}

dyn_clone::clone_trait_object!(VectorIndexProvider);
