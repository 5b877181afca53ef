//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for catalogue reads; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ProgrammesRepository`] - Programme lookups by PID

pub mod programmes_repository;

pub use programmes_repository::{ProgrammesRepository, RepositoryError};

#[cfg(test)]
pub use programmes_repository::MockProgrammesRepository;
