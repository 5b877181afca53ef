//! Partial calendar dates.
//!
//! Release dates in the catalogue are only known to a given precision: a
//! month or day of `0` means "unknown". Normalisation to a concrete date
//! treats every unknown component as `1`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// A date whose month and day may be unknown (`0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    year: i32,
    month: u32,
    day: u32,
    normalized: NaiveDate,
}

impl PartialDate {
    /// Creates a partial date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the date is impossible once unknown
    /// components are treated as `1` (e.g. month 13 or 30 February).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, AppError> {
        let normalized = NaiveDate::from_ymd_opt(year, month.max(1), day.max(1)).ok_or_else(|| {
            AppError::bad_request(
                "Invalid partial date",
                json!({ "year": year, "month": month, "day": day }),
            )
        })?;

        Ok(Self {
            year,
            month,
            day,
            normalized,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The normalised date with unknown components set to `1`.
    pub fn to_date(&self) -> NaiveDate {
        self.normalized
    }

    /// Midday UTC on the normalised date.
    pub fn at_midday_utc(&self) -> DateTime<Utc> {
        self.normalized
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
            .and_utc()
    }
}
