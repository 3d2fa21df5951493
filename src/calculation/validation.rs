//! Input validation for nightly pay calculation.
//!
//! This module runs the ordered business-rule checks on a job's three hour
//! markers and normalizes them onto the night timeline. Calculation only
//! ever sees a [`ValidatedNight`], so everything downstream works in plain
//! offset arithmetic and cannot fail.

use serde::{Deserialize, Serialize};

use crate::calculation::clock::{
    LATEST_START_OFFSET, MIDNIGHT_OFFSET, NIGHT_SPAN_HOURS, clock_to_offset,
};
use crate::error::{EngineError, EngineResult};
use crate::models::SitterJob;

/// A job whose hour markers have passed validation, normalized onto the
/// night timeline.
///
/// Offsets count hours from 5 PM. Holding one of these is proof that the
/// span fits within the 5 PM to 4 AM window, so segmentation and pricing
/// can proceed without further checks.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::{validate_job, ValidatedNight};
/// use sitter_engine::models::SitterJob;
///
/// let job = SitterJob::new(5, 9, 4);
/// let night = validate_job(&job).unwrap();
/// assert_eq!(night.start_offset, 0);
/// assert_eq!(night.bedtime_offset, 4);
/// assert_eq!(night.duration_hours, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedNight {
    /// The job's first hour on the night timeline.
    pub start_offset: u32,
    /// The bedtime boundary on the night timeline.
    pub bedtime_offset: u32,
    /// Total whole hours worked.
    pub duration_hours: u32,
}

/// Validates a job's hour markers and normalizes them onto the timeline.
///
/// Runs the business-rule checks in a fixed order, stopping at the first
/// failure:
///
/// 1. The start hour must be a permissible arrival, 5 PM through 1 AM.
/// 2. The duration must be between zero and eleven hours.
/// 3. The bedtime hour must fall between 5 PM and midnight.
/// 4. The span from start plus duration must not run past 4 AM.
///
/// # Arguments
///
/// * `job` - The job whose hour markers to validate
///
/// # Returns
///
/// A [`ValidatedNight`] with all three markers on the night timeline, or
/// the error for the first failed check: [`EngineError::StartTimeInvalid`]
/// for check 1, [`EngineError::DurationInvalid`] for checks 2 and 4, and
/// [`EngineError::BedtimeMidnight`] for check 3.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::validate_job;
/// use sitter_engine::error::EngineError;
/// use sitter_engine::models::SitterJob;
///
/// // A 2 AM arrival is outside the booking window
/// let job = SitterJob::new(2, 9, 2);
/// assert_eq!(validate_job(&job), Err(EngineError::StartTimeInvalid));
///
/// // An 11 PM arrival with six hours would run past 4 AM
/// let job = SitterJob::new(11, 12, 6);
/// assert_eq!(validate_job(&job), Err(EngineError::DurationInvalid));
/// ```
pub fn validate_job(job: &SitterJob) -> EngineResult<ValidatedNight> {
    let start_offset = clock_to_offset(job.start_hour).ok_or(EngineError::StartTimeInvalid)?;
    if start_offset > LATEST_START_OFFSET {
        return Err(EngineError::StartTimeInvalid);
    }

    let duration_hours =
        u32::try_from(job.duration_hours).map_err(|_| EngineError::DurationInvalid)?;
    if duration_hours > NIGHT_SPAN_HOURS {
        return Err(EngineError::DurationInvalid);
    }

    let bedtime_offset = clock_to_offset(job.bed_hour).ok_or(EngineError::BedtimeMidnight)?;
    if bedtime_offset > MIDNIGHT_OFFSET {
        return Err(EngineError::BedtimeMidnight);
    }

    // Individually valid markers can still describe a span past 4 AM
    if start_offset + duration_hours > NIGHT_SPAN_HOURS {
        return Err(EngineError::DurationInvalid);
    }

    Ok(ValidatedNight {
        start_offset,
        bedtime_offset,
        duration_hours,
    })
}
