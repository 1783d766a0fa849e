//! # API Route Handlers
//!
//! Organizes all the Axum route handlers for `dealerbot-server`, split into
//! logical sub-modules (chat, bookings, finance, ingestion).

pub mod bookings;
pub mod chat;
pub mod finance;
pub mod general;
pub mod ingest;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use bookings::*;
pub use chat::*;
pub use finance::*;
pub use general::*;
pub use ingest::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
