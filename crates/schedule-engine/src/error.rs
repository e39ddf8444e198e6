//! Error types for schedule-engine boundary operations.
//!
//! Queries never fail: "nothing found" is an empty `Vec` or `None`. These errors
//! only come from parsing caller input and loading datasets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// An appointment record broke the `start < end` invariant.
    #[error("Invalid appointment {id}: {reason}")]
    InvalidAppointment { id: String, reason: String },

    /// The backing data source could not be read at all. Distinct from an
    /// empty result, which is a normal outcome.
    #[error("Data unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
