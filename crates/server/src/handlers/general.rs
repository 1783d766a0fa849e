//! Root and health check handlers.

/// The root handler.
pub async fn root() -> &'static str {
    "dealerbot server is running."
}

/// The health check handler.
pub async fn health_check() -> &'static str {
    "OK"
}
