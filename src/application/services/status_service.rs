//! Database health probing for the status endpoint.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::Pid;
use crate::domain::repositories::ProgrammesRepository;

/// Outcome of a full status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub checked_at: DateTime<Utc>,
    /// A connection to the database could be established.
    pub db_connectivity: bool,
    /// The probe lookup failed for a reason other than the database being
    /// out of reach.
    pub has_db_issues: bool,
}

/// Service probing the catalogue database.
///
/// The probe loads a well-known programme. A database that cannot be reached
/// is not reported as an issue: the service keeps serving and the load
/// balancer must not take it out of rotation for an outage it cannot fix.
/// Any other failure is.
pub struct StatusService<R: ProgrammesRepository + ?Sized = dyn ProgrammesRepository> {
    repository: Arc<R>,
    probe_pid: Pid,
}

impl<R: ProgrammesRepository + ?Sized> StatusService<R> {
    /// Creates a new status service probing `probe_pid`.
    pub fn new(repository: Arc<R>, probe_pid: Pid) -> Self {
        Self {
            repository,
            probe_pid,
        }
    }

    /// Runs the probe lookup and reports whether it revealed a database
    /// issue.
    pub async fn has_database_issues(&self) -> bool {
        match self.repository.find_by_pid_full(&self.probe_pid).await {
            Ok(_) => false,
            Err(e) if e.is_failure() => {
                tracing::warn!("Status probe for {} failed: {}", self.probe_pid, e);
                true
            }
            Err(e) => {
                tracing::warn!("Status probe for {} skipped: {}", self.probe_pid, e);
                false
            }
        }
    }

    /// Runs the probe and a connectivity check.
    pub async fn report(&self) -> StatusReport {
        let has_db_issues = self.has_database_issues().await;
        let db_connectivity = self.repository.ping().await;

        StatusReport {
            checked_at: Utc::now(),
            db_connectivity,
            has_db_issues,
        }
    }
}
