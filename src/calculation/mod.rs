//! Calculation logic for the Nightly Pay Engine.
//!
//! This module contains all the calculation functions for determining a
//! night's pay, including the night clock mapping, hour marker validation,
//! rate band classification, segmentation of the worked span at rate
//! boundaries, and the nightly pay orchestration with its audit trail.

mod clock;
mod nightly_pay;
mod rate_band;
mod validation;

pub use clock::{
    LATEST_START_OFFSET, MIDNIGHT_OFFSET, NIGHT_SPAN_HOURS, clock_to_offset, offset_to_clock,
};
pub use nightly_pay::{NightlyPayResult, calculate, calculate_nightly_pay};
pub use rate_band::{NightSegment, RateBand, band_for_offset, segment_by_band};
pub use validation::{ValidatedNight, validate_job};
