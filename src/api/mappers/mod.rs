//! Mapping from catalogue entities to APS documents.
//!
//! - [`find_by_pid_programme`] - Entry point; rejects non-programme entities
//! - [`programme`] - Programme documents and the ancestor chain
//! - [`ownership`] - Master-brand / network ownership
//! - [`category`] - Genres and formats
//!
//! All mappers are pure functions of their input.

pub mod category;
pub mod find_by_pid_programme;
pub mod ownership;
pub mod programme;

pub use find_by_pid_programme::FindByPidProgrammeMapper;
