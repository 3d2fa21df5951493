//! Error types for the Nightly Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pay calculation.
//!
//! Every error renders as one of three stable identifiers so callers and
//! test suites can match on the string without parsing prose. The variants
//! deliberately carry no payload: offending input values are never echoed
//! back through an error (callers already hold the inputs and log them
//! under their own correlation ids).

use thiserror::Error;

/// Stable identifier for a rejected start hour.
pub const ERR_START_TIME_INVALID: &str = "ERR_START_TIME_INVALID";

/// Stable identifier for a rejected duration.
pub const ERR_DURATION_INVALID: &str = "ERR_DURATION_INVALID";

/// Stable identifier for a rejected bedtime hour.
pub const ERR_BEDTIME_MIDNIGHT: &str = "ERR_BEDTIME_MIDNIGHT";

/// The main error type for the Nightly Pay Engine.
///
/// All validation failures in the engine surface as one of these three
/// conditions. Calculation itself cannot fail once validation has passed.
///
/// # Example
///
/// ```
/// use sitter_engine::error::EngineError;
///
/// let error = EngineError::StartTimeInvalid;
/// assert_eq!(error.to_string(), "ERR_START_TIME_INVALID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The start hour is outside the permissible arrival window.
    ///
    /// Arrivals are booked between 5 PM and 1 AM, so the accepted clock
    /// values are 5 through 12 plus 1. Anything else, including values
    /// that are not on the 1-12 clock at all, is rejected here.
    #[error("ERR_START_TIME_INVALID")]
    StartTimeInvalid,

    /// The duration is negative or pushes the job past 4 AM.
    ///
    /// A job spans at most the eleven hours from 5 PM to 4 AM. Raised for
    /// a negative duration, a duration above eleven hours, and for an
    /// otherwise-valid start whose span would run past 4 AM.
    #[error("ERR_DURATION_INVALID")]
    DurationInvalid,

    /// The bedtime hour is outside the 5 PM to midnight window.
    ///
    /// Bedtime marks the switch from the start rate to the bedtime rate
    /// and may not be scheduled past midnight, so the accepted clock
    /// values are 5 through 12 only.
    #[error("ERR_BEDTIME_MIDNIGHT")]
    BedtimeMidnight,
}

impl EngineError {
    /// Returns the stable identifier for this error condition.
    ///
    /// Identical to the `Display` output but usable where a `&'static str`
    /// is needed, such as API error codes.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::StartTimeInvalid => ERR_START_TIME_INVALID,
            EngineError::DurationInvalid => ERR_DURATION_INVALID,
            EngineError::BedtimeMidnight => ERR_BEDTIME_MIDNIGHT,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
