//! Error types for tz-scheduler operations.
//!
//! Business-hours conflicts are not errors: they are reported as data in
//! [`crate::ConflictReport`]. These variants cover malformed requests only.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid window: end {end} must be after start {start}")]
    InvalidWindow { start: String, end: String },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    #[error("Invalid usernames: {}", .0.join(", "))]
    UnresolvedParticipants(Vec<String>),
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
