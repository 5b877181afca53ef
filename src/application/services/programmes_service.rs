//! Programme lookup service.

use crate::domain::entities::{Pid, Programme};
use crate::domain::repositories::ProgrammesRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for reading programmes from the catalogue.
pub struct ProgrammesService<R: ProgrammesRepository + ?Sized = dyn ProgrammesRepository> {
    repository: Arc<R>,
}

impl<R: ProgrammesRepository + ?Sized> ProgrammesService<R> {
    /// Creates a new programmes service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Parses a PID and loads the programme with its full graph.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the PID is malformed.
    /// Returns [`AppError::NotFound`] if no programme has this PID.
    /// Returns [`AppError::Unavailable`] if the catalogue cannot be reached.
    /// Returns [`AppError::Internal`] on other database errors.
    pub async fn find_by_pid_full(&self, pid: &str) -> Result<Programme, AppError> {
        let pid = Pid::new(pid)?;

        self.repository
            .find_by_pid_full(&pid)
            .await?
            .ok_or_else(|| AppError::not_found("Programme not found", json!({ "pid": pid.as_str() })))
    }
}
