//! Business logic services for the application layer.

pub mod programmes_service;
pub mod status_service;

pub use programmes_service::ProgrammesService;
pub use status_service::{StatusReport, StatusService};
