//! # Booking Route Handlers
//!
//! Create and list test drive bookings. Creation validates the payload in
//! the store and responds with the persisted record.

use super::{AppError, AppState};
use axum::{extract::State, http::StatusCode, Json};
use dealerbot::bookings::{Booking, NewBooking};
use serde::Serialize;
use tracing::info;

/// The response body for a successfully created booking.
#[derive(Serialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: Booking,
}

/// The handler for `POST /bookings`.
pub async fn create_booking_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    info!("Received booking request for {} {}", payload.car_make, payload.car_model);

    let booking = app_state.booking_store.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            booking,
        }),
    ))
}

/// The handler for `GET /bookings`.
pub async fn list_bookings_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = app_state.booking_store.list().await?;
    Ok(Json(bookings))
}
