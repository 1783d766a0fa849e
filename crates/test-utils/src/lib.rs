//! Mock provider implementations for deterministic pipeline tests.
//!
//! Each mock records its calls so tests can assert not only on the resolved
//! answer but on which pipeline stages ran (e.g. an FAQ hit must make zero
//! provider calls). Clones share state, so a mock can be handed to a
//! resolver and inspected afterwards.

use async_trait::async_trait;
use dealerbot::{
    errors::ChatError,
    providers::{
        ai::{EmbeddingProvider, GenerationProvider},
        index::{IndexEntry, RetrievalMatch, VectorIndexProvider},
    },
};
use std::sync::{Arc, Mutex};

// --- Mock Embedding Provider ---

#[derive(Clone, Debug, Default)]
pub struct MockEmbeddingProvider {
    vector: Arc<Mutex<Vec<f32>>>,
    error: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            vector: Arc::new(Mutex::new(vec![0.1, 0.2, 0.3, 0.4])),
            ..Default::default()
        }
    }

    /// Sets the vector returned by every `embed` call.
    pub fn with_vector(self, vector: Vec<f32>) -> Self {
        *self.vector.lock().unwrap() = vector;
        self
    }

    /// Makes every subsequent `embed` call fail with an upstream error.
    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    /// The texts passed to `embed`, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ChatError> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(ChatError::UpstreamApi(message));
        }
        Ok(self.vector.lock().unwrap().clone())
    }
}

// --- Mock Vector Index Provider ---

#[derive(Clone, Debug, Default)]
pub struct MockVectorIndexProvider {
    matches: Arc<Mutex<Vec<RetrievalMatch>>>,
    error: Arc<Mutex<Option<String>>>,
    search_calls: Arc<Mutex<Vec<(Vec<f32>, usize)>>>,
    upserted: Arc<Mutex<Vec<IndexEntry>>>,
}

impl MockVectorIndexProvider {
    /// A provider whose searches return no matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matches returned by every `search` call.
    pub fn with_matches(self, matches: Vec<RetrievalMatch>) -> Self {
        *self.matches.lock().unwrap() = matches;
        self
    }

    /// Makes every subsequent call fail with an upstream error.
    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    /// The `(vector, top_k)` arguments passed to `search`, in call order.
    pub fn get_search_calls(&self) -> Vec<(Vec<f32>, usize)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn search_count(&self) -> usize {
        self.search_calls.lock().unwrap().len()
    }

    /// All entries passed to `upsert`, flattened in call order.
    pub fn get_upserted(&self) -> Vec<IndexEntry> {
        self.upserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorIndexProvider for MockVectorIndexProvider {
    async fn search(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> Result<Vec<RetrievalMatch>, ChatError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((vector.to_vec(), top_k));
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(ChatError::UpstreamApi(message));
        }
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn upsert(&self, entries: &[IndexEntry]) -> Result<(), ChatError> {
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(ChatError::UpstreamApi(message));
        }
        self.upserted.lock().unwrap().extend_from_slice(entries);
        Ok(())
    }
}

// --- Mock Generation Provider ---

#[derive(Clone, Debug, Default)]
pub struct MockGenerationProvider {
    response: Arc<Mutex<String>>,
    error: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the answer returned by every `generate` call.
    pub fn with_response(self, response: &str) -> Self {
        *self.response.lock().unwrap() = response.to_string();
        self
    }

    /// Makes every subsequent `generate` call fail with an upstream error.
    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    /// The prompts passed to `generate`, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(ChatError::UpstreamApi(message));
        }
        Ok(self.response.lock().unwrap().clone())
    }
}
