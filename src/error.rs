//! Error types for the Toll Charge Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during toll calculation.

use thiserror::Error;

/// The main error type for the Toll Charge Calculation Engine.
///
/// Every failure is an input-validation failure caused by caller-supplied
/// data; there are no fatal conditions. Callers recover by correcting the
/// offending input and calling again.
///
/// # Example
///
/// ```
/// use toll_engine::error::TollError;
///
/// let error = TollError::InvalidTimePeriod {
///     value: "midnight".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time period: midnight");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TollError {
    /// The requested distance was zero or negative.
    #[error("Distance must be greater than 0")]
    InvalidDistance,

    /// The membership token was not one of the recognized values.
    #[error("Invalid membership type")]
    InvalidMembership,

    /// The time-period token was not one of the recognized values.
    #[error("Invalid time period: {value}")]
    InvalidTimePeriod {
        /// The offending raw token supplied by the caller.
        value: String,
    },
}

/// A type alias for Results that return TollError.
pub type TollResult<T> = Result<T, TollError>;
