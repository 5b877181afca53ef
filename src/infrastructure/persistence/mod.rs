//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgProgrammesRepository`] - Programme graph lookups and connectivity checks

pub mod pg_programmes_repository;

pub use pg_programmes_repository::PgProgrammesRepository;
