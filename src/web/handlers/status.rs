//! Status endpoint for load balancers and humans.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Template for the status diagnostic page.
///
/// Renders `templates/status.html` with the check time, database
/// connectivity and the outcome of the probe lookup.
#[derive(Template, WebTemplate)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub now: String,
    pub version: &'static str,
    pub db_connectivity: bool,
    pub db_error_check: bool,
}

/// Reports service status.
///
/// # Endpoint
///
/// `GET /status`
///
/// # Response
///
/// For the configured load balancer `User-Agent`, a plain text body:
///
/// - **200 OK** `OK` - no database issues (an unreachable database counts
///   as no issue)
/// - **500 Internal Server Error** `ERROR` - the probe lookup failed
///
/// Any other client gets the HTML diagnostic page with status 200.
pub async fn status_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let from_load_balancer = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ua| ua == &*state.healthcheck_user_agent);

    if from_load_balancer {
        let (status, body) = if state.status_service.has_database_issues().await {
            (StatusCode::INTERNAL_SERVER_ERROR, "ERROR")
        } else {
            (StatusCode::OK, "OK")
        };
        return (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response();
    }

    let report = state.status_service.report().await;

    StatusTemplate {
        now: report.checked_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        version: env!("CARGO_PKG_VERSION"),
        db_connectivity: report.db_connectivity,
        db_error_check: report.has_db_issues,
    }
    .into_response()
}
