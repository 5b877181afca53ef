//! Entry point of the APS programme mapping.

use serde_json::json;

use crate::api::dto::aps::ApsProgramme;
use crate::api::mappers::programme::map_programme;
use crate::domain::entities::DomainEntity;
use crate::error::AppError;

/// Maps catalogue entities to the APS programme document served by
/// `/aps/programmes/{pid}`.
///
/// Stateless: one instance can be shared across requests and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindByPidProgrammeMapper;

impl FindByPidProgrammeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Maps a programme (brand, series, episode or clip) to its APS document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `entity` is not a programme.
    pub fn get_aps_object(&self, entity: &DomainEntity) -> Result<ApsProgramme, AppError> {
        match entity {
            DomainEntity::Programme(programme) => Ok(map_programme(programme)),
            other => Err(AppError::invalid_argument(
                "Expected a brand, series, episode or clip",
                json!({ "received": other.kind() }),
            )),
        }
    }
}
