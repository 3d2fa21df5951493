//! Rate schedule types for nightly pay calculation.
//!
//! This module contains the strongly-typed rate schedule consumed by the
//! calculation modules. The engine has no configuration files: the standard
//! schedule is built in code and shared through the API state.

use serde::{Deserialize, Serialize};

/// Hourly rate from job start until bedtime, in whole dollars.
pub const STANDARD_START_RATE: u32 = 12;

/// Hourly rate from bedtime until midnight, in whole dollars.
pub const STANDARD_BED_RATE: u32 = 8;

/// Hourly rate from midnight until job end, in whole dollars.
pub const STANDARD_MIDNIGHT_RATE: u32 = 16;

/// The three hourly rates applied across a night.
///
/// Rates are whole dollars per whole hour. Fractional hours and fractional
/// dollars do not exist in this domain, so amounts stay in integer math
/// end to end.
///
/// # Example
///
/// ```
/// use sitter_engine::config::RateSchedule;
///
/// let schedule = RateSchedule::standard();
/// assert_eq!(schedule.start_rate, 12);
/// assert_eq!(schedule.bed_rate, 8);
/// assert_eq!(schedule.midnight_rate, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Rate for hours worked before bedtime.
    pub start_rate: u32,
    /// Rate for hours worked from bedtime until midnight.
    pub bed_rate: u32,
    /// Rate for hours worked from midnight onward.
    pub midnight_rate: u32,
}

impl RateSchedule {
    /// Returns the standard 12/8/16 schedule.
    pub fn standard() -> Self {
        Self {
            start_rate: STANDARD_START_RATE,
            bed_rate: STANDARD_BED_RATE,
            midnight_rate: STANDARD_MIDNIGHT_RATE,
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule_rates() {
        let schedule = RateSchedule::standard();
        assert_eq!(schedule.start_rate, 12);
        assert_eq!(schedule.bed_rate, 8);
        assert_eq!(schedule.midnight_rate, 16);
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(RateSchedule::default(), RateSchedule::standard());
    }

    #[test]
    fn test_schedule_serializes_to_json() {
        let schedule = RateSchedule::standard();
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("\"start_rate\":12"));
        assert!(json.contains("\"bed_rate\":8"));
        assert!(json.contains("\"midnight_rate\":16"));
    }

    #[test]
    fn test_schedule_deserializes_from_json() {
        let json = r#"{"start_rate":10,"bed_rate":6,"midnight_rate":20}"#;
        let schedule: RateSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.start_rate, 10);
        assert_eq!(schedule.bed_rate, 6);
        assert_eq!(schedule.midnight_rate, 20);
    }
}
