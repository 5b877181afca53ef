//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::programmes_service::ProgrammesService`] - Programme lookups
//! - [`services::status_service::StatusService`] - Database health probing

pub mod services;
