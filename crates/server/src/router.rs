use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
///
/// The CORS layer is permissive because the chat and booking endpoints are
/// called directly from the public site's browser code.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .route(
            "/bookings",
            post(handlers::create_booking_handler).get(handlers::list_bookings_handler),
        )
        .route("/finance/emi", post(handlers::emi_handler))
        .route(
            "/ingest/knowledge",
            post(handlers::ingest_knowledge_handler),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
