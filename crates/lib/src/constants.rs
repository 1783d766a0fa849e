//! Shared constants for the chat pipeline.

/// The number of nearest documents requested from the vector index.
pub const TOP_K: usize = 5;

/// The maximum number of tokens the generation provider may produce.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

/// The metadata category that marks a knowledge base document as an FAQ entry.
pub const FAQ_CATEGORY: &str = "faq";

/// The answer returned when the vector index has no relevant documents.
/// Returned instead of generating from an empty context, which tends to
/// produce hallucinated answers.
pub const NO_INFORMATION_FALLBACK: &str = "Sorry, I don't have information on that right now.";

/// The separator placed between numbered context snippets in the prompt.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";
