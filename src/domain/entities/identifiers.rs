//! Identifier value types used across the catalogue.
//!
//! - [`Pid`] - programme identifier (programmes, images, versions)
//! - [`Mid`] - master-brand identifier (e.g. `bbc_one_scotland`)
//! - [`Nid`] - network identifier (e.g. `bbc_one`)

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;
use serde_json::json;

/// PIDs use a restricted consonant/digit alphabet with no vowels.
static PID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9b-df-hj-np-tv-z]{8,15}$").expect("PID pattern must compile")
});

/// A validated programme identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pid(String);

impl Pid {
    /// Parses a PID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is not a well-formed PID.
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if !PID_PATTERN.is_match(&value) {
            return Err(AppError::bad_request(
                "Invalid PID",
                json!({ "pid": value, "hint": "8-15 characters of 0-9 and consonants" }),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Master-brand identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mid(String);

impl Mid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Network identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nid(String);

impl Nid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
