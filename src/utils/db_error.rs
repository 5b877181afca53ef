//! Classification of SQLx errors into [`RepositoryError`] variants.

use crate::domain::repositories::RepositoryError;

/// SQLSTATE codes for races that resolve on retry.
const TRANSIENT_CODES: &[&str] = &[
    "40001", // serialization_failure
    "40P01", // deadlock_detected
    "55P03", // lock_not_available
    "57014", // query_canceled (statement timeout)
];

/// SQLSTATE codes for a server that is going away.
const UNAVAILABLE_CODES: &[&str] = &[
    "57P01", // admin_shutdown
    "57P02", // crash_shutdown
    "57P03", // cannot_connect_now
    "53300", // too_many_connections
];

/// Maps a SQLx error onto the repository failure classes.
///
/// Connection-level failures (I/O, TLS, pool timeouts, SQLSTATE class `08`)
/// are [`RepositoryError::Unavailable`]; lock and serialization races are
/// [`RepositoryError::Transient`]; decoding problems are
/// [`RepositoryError::Corrupt`]; everything else is [`RepositoryError::Query`].
pub fn classify(e: &sqlx::Error) -> RepositoryError {
    let message = e.to_string();

    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::Unavailable(message),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_) => RepositoryError::Corrupt(message),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().unwrap_or_default();
            if code.starts_with("08") || UNAVAILABLE_CODES.contains(&&*code) {
                RepositoryError::Unavailable(message)
            } else if TRANSIENT_CODES.contains(&&*code) {
                RepositoryError::Transient(message)
            } else {
                RepositoryError::Query(message)
            }
        }
        _ => RepositoryError::Query(message),
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        classify(&e)
    }
}
