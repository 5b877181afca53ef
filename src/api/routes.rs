//! API route configuration.

use crate::api::handlers::find_by_pid_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// APS document routes.
///
/// # Endpoints
///
/// - `GET /aps/programmes/{pid}` - APS document for a programme
pub fn aps_routes() -> Router<AppState> {
    Router::new().route("/aps/programmes/{pid}", get(find_by_pid_handler))
}
