//! # Dealership Assistant Core
//!
//! This crate provides the core logic for the dealership assistant service:
//! a retrieval-augmented chat pipeline over a small knowledge base, backed by
//! configurable embedding, vector index, and text generation providers, plus
//! the supporting booking storage and financing math used by the HTTP server.
//!
//! The chat pipeline is strictly sequential: normalize the query, try the FAQ
//! short-circuit, then embed, search, compose a prompt, and generate. Each
//! stage's input depends on the previous stage's output, so no stage runs
//! concurrently with another within a single request.

pub mod bookings;
pub mod constants;
pub mod errors;
pub mod faq;
pub mod finance;
pub mod knowledge;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod resolver;

pub use errors::ChatError;
pub use knowledge::{Document, DocumentMetadata, KnowledgeBase};
pub use providers::index::{IndexEntry, MatchMetadata, RetrievalMatch};
pub use resolver::QueryResolver;
