//! # Pinecone Index Provider
//!
//! Production implementation of [`VectorIndexProvider`] against the Pinecone
//! data-plane HTTP API. The provider is configured with the index host URL
//! and an API key; `search` hits `/query` and `upsert` hits `/vectors/upsert`.

use crate::{
    errors::ChatError,
    providers::index::{IndexEntry, MatchMetadata, RetrievalMatch, VectorIndexProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Debug)]
struct QueryRequest<'a> {
    vector: &'a [f32],
    #[serde(rename = "topK")]
    top_k: usize,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
}

#[derive(Deserialize, Debug)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize, Debug)]
struct QueryMatch {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    metadata: MatchMetadata,
}

#[derive(Serialize, Debug)]
struct UpsertRequest<'a> {
    vectors: &'a [IndexEntry],
}

/// A provider for a Pinecone serverless index.
#[derive(Clone, Debug)]
pub struct PineconeProvider {
    client: ReqwestClient,
    index_url: String,
    api_key: Option<String>,
}

impl PineconeProvider {
    /// Creates a new `PineconeProvider` for the given index host URL.
    pub fn new(index_url: String, api_key: Option<String>) -> Result<Self, ChatError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ChatError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            // Endpoint paths are appended below; keep the host bare.
            index_url: index_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request_builder = self.client.post(format!("{}{path}", self.index_url));
        if let Some(key) = &self.api_key {
            request_builder = request_builder.header("Api-Key", key);
        }
        request_builder
    }
}

#[async_trait]
impl VectorIndexProvider for PineconeProvider {
    async fn search(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievalMatch>, ChatError> {
        let request_body = QueryRequest {
            vector,
            top_k,
            include_metadata: true,
        };
        debug!(index_url = %self.index_url, top_k, "--> Sending query to vector index");

        let response = self
            .request("/query")
            .json(&request_body)
            .send()
            .await
            .map_err(ChatError::UpstreamRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::UpstreamApi(error_text));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(ChatError::UpstreamDeserialization)?;

        Ok(query_response
            .matches
            .into_iter()
            .map(|m| RetrievalMatch {
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }

    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), ChatError> {
        let request_body = UpsertRequest { vectors: entries };
        debug!(index_url = %self.index_url, count = entries.len(), "--> Upserting vectors");

        let response = self
            .request("/vectors/upsert")
            .json(&request_body)
            .send()
            .await
            .map_err(ChatError::UpstreamRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::UpstreamApi(error_text));
        }

        Ok(())
    }
}
