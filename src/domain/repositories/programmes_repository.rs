//! Repository trait for programme lookups.

use crate::domain::entities::{Pid, Programme};
use async_trait::async_trait;

/// Failure classes of the catalogue store.
///
/// The variants separate "the database is not there" from "the database
/// answered with an error", which the status endpoint reports differently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The database cannot be reached (network, pool exhaustion, shutdown).
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// The query lost a race (deadlock, lock timeout, serialization failure)
    /// and may succeed on retry.
    #[error("Transient database error: {0}")]
    Transient(String),

    /// The database rejected the query.
    #[error("Database query failed: {0}")]
    Query(String),

    /// Stored data cannot be turned into a domain entity.
    #[error("Corrupt catalogue data: {0}")]
    Corrupt(String),
}

impl RepositoryError {
    /// Returns true if the error means the database itself is unhealthy
    /// rather than merely out of reach.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Query(_) | Self::Corrupt(_))
    }
}

/// Repository interface for reading programmes from the catalogue.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProgrammesRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgrammesRepository: Send + Sync {
    /// Finds a programme by PID with its full graph loaded: image,
    /// master-brand and network, categories (genres with their broader
    /// chain), versions for items, and the ancestor chain.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] classifying the database failure.
    async fn find_by_pid_full(&self, pid: &Pid) -> Result<Option<Programme>, RepositoryError>;

    /// Returns true if a connection to the database can be established.
    async fn ping(&self) -> bool;
}
