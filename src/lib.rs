//! # Clifton
//!
//! Programme catalogue service exposing APS documents and a status endpoint.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Catalogue entities and repository traits
//! - **Application Layer** ([`application`]) - Lookup and status services
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repository
//! - **API Layer** ([`api`]) - APS document mapping, DTOs and handlers
//! - **Web Layer** ([`web`]) - HTML status page
//!
//! ## APS documents
//!
//! [`api::mappers::FindByPidProgrammeMapper`] turns a brand, series,
//! episode or clip into the APS document served at
//! `/aps/programmes/{pid}`. Mapping is pure and needs no database:
//!
//! ```rust,ignore
//! let mapper = FindByPidProgrammeMapper::new();
//! let document = mapper.get_aps_object(&DomainEntity::Programme(episode))?;
//! println!("{}", serde_json::to_string_pretty(&document)?);
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::dto::aps::ApsProgramme;
    pub use crate::api::mappers::FindByPidProgrammeMapper;
    pub use crate::application::services::{ProgrammesService, StatusService};
    pub use crate::domain::entities::{DomainEntity, Programme};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
