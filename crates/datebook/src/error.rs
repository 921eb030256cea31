//! Error types for datebook operations.

use thiserror::Error;

/// Errors raised by calendar arithmetic and date construction.
///
/// The store itself never fails; every error originates from a month or day
/// that does not exist in the proleptic Gregorian calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout datebook.
pub type Result<T> = std::result::Result<T, CalendarError>;
