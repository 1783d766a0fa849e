//! # Bedrock Runtime Providers
//!
//! Production implementations of the embedding and generation traits against
//! the Bedrock model-invoke HTTP API. Each provider posts a model-specific
//! JSON payload to a configured invoke URL and parses the response body.
//!
//! The generation response is parsed defensively through an ordered list of
//! extractor functions, because the answer field path differs between the
//! Nova response shape and OpenAI-compatible gateways fronting the same
//! endpoint. New shapes get a new extractor, not new orchestration logic.

use crate::{
    constants::MAX_OUTPUT_TOKENS,
    errors::ChatError,
    providers::ai::{EmbeddingProvider, GenerationProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

// --- Titan embedding request and response structures ---

#[derive(Serialize, Debug)]
struct TitanEmbeddingRequest<'a> {
    #[serde(rename = "inputText")]
    input_text: &'a str,
}

#[derive(Deserialize, Debug)]
struct TitanEmbeddingResponse {
    embedding: Vec<f32>,
}

/// A provider for generating embeddings with a Titan text embedding model.
#[derive(Clone, Debug)]
pub struct TitanEmbeddingProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl TitanEmbeddingProvider {
    /// Creates a new `TitanEmbeddingProvider` for the given invoke URL.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, ChatError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ChatError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for TitanEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ChatError> {
        let request_body = TitanEmbeddingRequest { input_text: text };
        debug!(api_url = %self.api_url, "--> Sending request to embedding API");

        let mut request_builder = self.client.post(&self.api_url).json(&request_body);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .send()
            .await
            .map_err(ChatError::UpstreamRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::UpstreamApi(error_text));
        }

        let embedding_response: TitanEmbeddingResponse = response
            .json()
            .await
            .map_err(ChatError::UpstreamDeserialization)?;

        Ok(embedding_response.embedding)
    }
}

// --- Nova generation provider ---

/// An ordered extractor over the generation response body. The first
/// extractor that finds an answer wins.
type AnswerExtractor = fn(&Value) -> Option<&str>;

/// Extractors tried in order: the native Nova shape first, then the
/// OpenAI-compatible shape some gateways return.
const ANSWER_EXTRACTORS: &[AnswerExtractor] = &[extract_nova_answer, extract_choices_answer];

fn extract_nova_answer(body: &Value) -> Option<&str> {
    body.get("output")?
        .get("message")?
        .get("content")?
        .get(0)?
        .get("text")?
        .as_str()
}

fn extract_choices_answer(body: &Value) -> Option<&str> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// Pulls the answer text out of a generation response body, trying each
/// known field path in order and defaulting to an empty string.
pub(crate) fn extract_answer_text(body: &Value) -> String {
    ANSWER_EXTRACTORS
        .iter()
        .find_map(|extract| extract(body))
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// A provider for generating answer text with a Nova model.
#[derive(Clone, Debug)]
pub struct NovaGenerationProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl NovaGenerationProvider {
    /// Creates a new `NovaGenerationProvider` for the given invoke URL.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, ChatError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ChatError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl GenerationProvider for NovaGenerationProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        let request_body = json!({
            "inferenceConfig": { "max_new_tokens": MAX_OUTPUT_TOKENS },
            "messages": [{ "role": "user", "content": [{ "text": prompt }] }],
        });
        debug!(api_url = %self.api_url, "--> Sending request to generation API");

        let mut request_builder = self.client.post(&self.api_url).json(&request_body);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .send()
            .await
            .map_err(ChatError::UpstreamRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::UpstreamApi(error_text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(ChatError::UpstreamDeserialization)?;

        // A present-but-empty answer is a valid result, not an error.
        Ok(extract_answer_text(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_primary_field_path() {
        let body = json!({
            "output": { "message": { "content": [{ "text": "  the answer  " }] } }
        });
        assert_eq!(extract_answer_text(&body), "the answer");
    }

    #[test]
    fn test_falls_back_to_alternate_field_path() {
        let body = json!({
            "choices": [{ "message": { "content": [{ "text": "alternate shape" }] } }]
        });
        assert_eq!(extract_answer_text(&body), "alternate shape");
    }

    #[test]
    fn test_primary_path_wins_when_both_present() {
        let body = json!({
            "output": { "message": { "content": [{ "text": "primary" }] } },
            "choices": [{ "message": { "content": [{ "text": "alternate" }] } }]
        });
        assert_eq!(extract_answer_text(&body), "primary");
    }

    #[test]
    fn test_unknown_shape_defaults_to_empty() {
        assert_eq!(extract_answer_text(&json!({ "unexpected": true })), "");
        assert_eq!(extract_answer_text(&json!(null)), "");
    }
}
