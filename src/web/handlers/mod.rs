//! HTML page handlers.

pub mod status;

pub use status::status_handler;
