//! # Finance Route Handler
//!
//! Server-side EMI quotes for the site's finance calculator.

use super::{AppError, AppState};
use axum::{extract::State, Json};
use dealerbot::finance::{calculate_emi, EmiQuote};
use serde::Deserialize;

/// The request body for the `/finance/emi` endpoint.
#[derive(Deserialize)]
pub struct EmiRequest {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub term_months: u32,
}

/// The handler for the `/finance/emi` endpoint.
pub async fn emi_handler(
    State(_app_state): State<AppState>,
    Json(payload): Json<EmiRequest>,
) -> Result<Json<EmiQuote>, AppError> {
    let quote = calculate_emi(payload.principal, payload.annual_rate_pct, payload.term_months)?;
    Ok(Json(quote))
}
