//! External provider boundaries: AI (embedding, generation) and vector index.

pub mod ai;
pub mod index;
