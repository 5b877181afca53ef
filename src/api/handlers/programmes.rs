//! Handler for APS programme documents.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::aps::ApsProgramme;
use crate::domain::entities::DomainEntity;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the APS document for a programme.
///
/// # Endpoint
///
/// `GET /aps/programmes/{pid}` (a trailing `.json` is accepted)
///
/// # Response
///
/// ```json
/// {
///   "type": "episode",
///   "pid": "b06tl32t",
///   "position": 101,
///   "image": { "pid": "p01m5mss" },
///   "media_type": "audio_video",
///   "title": "The Husbands of River Song",
///   "first_broadcast_date": "2015-02-01T12:00:00Z",
///   "categories": [],
///   "versions": [],
///   "parent": { "programme": { "type": "series", "pid": "b06hgxtt" } }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the PID is malformed.
/// Returns 404 Not Found if no programme has this PID.
/// Returns 503 Service Unavailable if the catalogue cannot be reached.
pub async fn find_by_pid_handler(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<ApsProgramme>, AppError> {
    let pid = pid.strip_suffix(".json").unwrap_or(&pid);

    let programme = state.programmes_service.find_by_pid_full(pid).await?;
    let aps = state
        .mapper
        .get_aps_object(&DomainEntity::Programme(programme))?;

    Ok(Json(aps))
}
