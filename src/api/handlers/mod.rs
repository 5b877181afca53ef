//! HTTP request handlers for API endpoints.

pub mod programmes;

pub use programmes::find_by_pid_handler;
