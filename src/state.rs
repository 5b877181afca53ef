//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::api::mappers::FindByPidProgrammeMapper;
use crate::application::services::{ProgrammesService, StatusService};

#[derive(Clone)]
pub struct AppState {
    pub programmes_service: Arc<ProgrammesService>,
    pub status_service: Arc<StatusService>,
    pub mapper: FindByPidProgrammeMapper,
    /// `User-Agent` of the load balancer health checker, which gets a plain
    /// text status instead of the diagnostic page.
    pub healthcheck_user_agent: Arc<str>,
}
