//! Rate band classification and night segmentation logic.
//!
//! This module provides utilities for determining which rate band any hour
//! of the night falls into and for splitting a job's worked span at the
//! bedtime and midnight boundaries for correct rate application.

use serde::{Deserialize, Serialize};

use crate::calculation::clock::MIDNIGHT_OFFSET;
use crate::calculation::validation::ValidatedNight;

/// Represents the rate band an hour of work falls into.
///
/// Used to determine which of the three hourly rates applies to each
/// worked hour. The bands partition the night at two boundaries, bedtime
/// and midnight.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::RateBand;
///
/// let band = RateBand::AfterMidnight;
/// assert_eq!(format!("{:?}", band), "AfterMidnight");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// From job start until bedtime, the awake-child rate.
    BeforeBedtime,
    /// From bedtime until midnight, the sleeping-child rate.
    AfterBedtime,
    /// From midnight until job end, the late-night rate.
    AfterMidnight,
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBand::BeforeBedtime => write!(f, "Before bedtime"),
            RateBand::AfterBedtime => write!(f, "After bedtime"),
            RateBand::AfterMidnight => write!(f, "After midnight"),
        }
    }
}

/// Determines the rate band for a given hour of the night.
///
/// Bands are resolved on the normalized timeline, never on raw clock
/// values. Hours at or past midnight bill at the late-night rate no matter
/// where bedtime sits; earlier hours split at the bedtime boundary.
///
/// # Arguments
///
/// * `offset` - The hour's offset on the night timeline (5 PM is 0)
/// * `bedtime_offset` - The bedtime boundary on the same timeline
///
/// # Returns
///
/// The [`RateBand`] for the given hour:
/// - [`RateBand::BeforeBedtime`] for hours before the bedtime boundary
/// - [`RateBand::AfterBedtime`] from bedtime up to midnight
/// - [`RateBand::AfterMidnight`] from midnight onward
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::{band_for_offset, clock_to_offset, RateBand};
///
/// // Bedtime at 9 PM
/// let bedtime = clock_to_offset(9).unwrap();
///
/// assert_eq!(band_for_offset(0, bedtime), RateBand::BeforeBedtime); // 5 PM
/// assert_eq!(band_for_offset(4, bedtime), RateBand::AfterBedtime);  // 9 PM
/// assert_eq!(band_for_offset(7, bedtime), RateBand::AfterMidnight); // midnight
/// ```
pub fn band_for_offset(offset: u32, bedtime_offset: u32) -> RateBand {
    if offset >= MIDNIGHT_OFFSET {
        RateBand::AfterMidnight
    } else if offset >= bedtime_offset {
        RateBand::AfterBedtime
    } else {
        RateBand::BeforeBedtime
    }
}

/// Represents a contiguous run of hours billed at a single rate.
///
/// When a job spans the bedtime or midnight boundary, it is split into
/// multiple segments, each within a single rate band. Offsets are on the
/// night timeline with the end exclusive.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::{NightSegment, RateBand};
///
/// let segment = NightSegment {
///     band: RateBand::BeforeBedtime,
///     start_offset: 0,
///     end_offset: 4,
///     hours: 4,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightSegment {
    /// The rate band this segment bills at.
    pub band: RateBand,
    /// The segment's first hour on the night timeline.
    pub start_offset: u32,
    /// The segment's exclusive end on the night timeline.
    pub end_offset: u32,
    /// The number of worked hours in this segment.
    pub hours: u32,
}

/// Segments a validated job by rate band boundaries.
///
/// Splits the worked span at the bedtime and midnight boundaries, creating
/// one segment per rate band the job touches. Bands with no hours produce
/// no segment.
///
/// # Arguments
///
/// * `night` - The validated, offset-normalized job to segment
///
/// # Returns
///
/// A vector of [`NightSegment`]s in chronological order, at most three.
/// The sum of all segment hours equals the job's duration.
///
/// # Behavior
///
/// - A job entirely within one band returns a single segment
/// - Each boundary crossed adds one segment
/// - A bedtime at or before the start hour leaves no before-bedtime segment
/// - A zero-hour job returns no segments
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::{segment_by_band, RateBand, ValidatedNight};
///
/// // 5 PM start, 9 PM bedtime, 7 hours: ends 12 AM exclusive of midnight
/// // would be offset 7, so one hour lands past midnight
/// let night = ValidatedNight {
///     start_offset: 0,
///     bedtime_offset: 4,
///     duration_hours: 7,
/// };
///
/// let segments = segment_by_band(&night);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].band, RateBand::BeforeBedtime);
/// assert_eq!(segments[0].hours, 4);
/// assert_eq!(segments[1].band, RateBand::AfterBedtime);
/// assert_eq!(segments[1].hours, 3);
/// ```
pub fn segment_by_band(night: &ValidatedNight) -> Vec<NightSegment> {
    let mut segments = Vec::new();
    let job_end = night.start_offset + night.duration_hours;
    let mut current_start = night.start_offset;

    while current_start < job_end {
        let band = band_for_offset(current_start, night.bedtime_offset);

        // Segment ends at the first hour billing in a different band, or
        // at job end, whichever is first
        let mut segment_end = current_start + 1;
        while segment_end < job_end && band_for_offset(segment_end, night.bedtime_offset) == band {
            segment_end += 1;
        }

        segments.push(NightSegment {
            band,
            start_offset: current_start,
            end_offset: segment_end,
            hours: segment_end - current_start,
        });

        current_start = segment_end;
    }

    segments
}
