//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::status_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /status` - Load balancer health check and diagnostic page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/status", get(status_handler))
}
