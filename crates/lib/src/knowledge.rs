//! # Knowledge Base Store
//!
//! A static, ordered collection of documents (FAQ entries and general
//! dealership content) loaded from a JSON file. The collection is read-only
//! after loading and small, so the server caches it process-wide and shares
//! it across concurrent requests without coordination.

use crate::errors::ChatError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata attached to a knowledge base document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A single knowledge base document.
///
/// FAQ entries store the canonical question on the first line of `text` and
/// the answer after an `Answer:` marker. General content documents may carry
/// their body in the top-level `content` field instead, which the ingestion
/// path prefers over `text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    /// The text an ingestion job should embed for this document, preferring
    /// the dedicated `content` field over the raw `text`. Returns `None` when
    /// the document has nothing embeddable.
    pub fn embeddable_text(&self) -> Option<&str> {
        match self.content.as_deref() {
            Some(content) if !content.is_empty() => Some(content),
            _ if !self.text.is_empty() => Some(&self.text),
            _ => None,
        }
    }
}

/// The in-memory knowledge base: an immutable, insertion-ordered document
/// collection.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
}

impl KnowledgeBase {
    /// Wraps an already-deserialized document collection, preserving order.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Parses a knowledge base from a JSON array of documents.
    pub fn from_json_str(json: &str) -> Result<Self, ChatError> {
        let documents: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self { documents })
    }

    /// Loads a knowledge base from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
