//! Job model for a night of babysitting.
//!
//! This module defines the SitterJob struct carrying the three hour
//! markers a caller supplies for a calculation.

use serde::{Deserialize, Serialize};

/// Represents one night of babysitting as booked by a caller.
///
/// Hours are on the 1-12 night clock: values 5 through 11 are 5 PM
/// through 11 PM, 12 is midnight, and 1 through 4 are 1 AM through 4 AM.
/// Markers are raw and unvalidated here; validation happens at the start
/// of every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitterJob {
    /// The clock hour the job starts.
    pub start_hour: i32,
    /// The clock hour the child goes to bed.
    pub bed_hour: i32,
    /// Total whole hours worked.
    pub duration_hours: i32,
}

impl SitterJob {
    /// Creates a new job from its three hour markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitter_engine::models::SitterJob;
    ///
    /// let job = SitterJob::new(5, 9, 4);
    /// assert_eq!(job.start_hour, 5);
    /// assert_eq!(job.bed_hour, 9);
    /// assert_eq!(job.duration_hours, 4);
    /// ```
    pub fn new(start_hour: i32, bed_hour: i32, duration_hours: i32) -> Self {
        Self {
            start_hour,
            bed_hour,
            duration_hours,
        }
    }
}
