//! The babysitter night clock.
//!
//! This module maps the 1-12 clock values used at the boundary onto a
//! normalized linear timeline so the rest of the engine can compare and
//! segment hours with plain range arithmetic. On the timeline 5 PM is
//! offset 0 and 4 AM is offset 11.

/// Length of the longest possible job in hours, 5 PM through 4 AM.
pub const NIGHT_SPAN_HOURS: u32 = 11;

/// Timeline offset of midnight (clock value 12).
pub const MIDNIGHT_OFFSET: u32 = 7;

/// Timeline offset of the latest permissible arrival, 1 AM.
pub const LATEST_START_OFFSET: u32 = 8;

/// Converts a 1-12 clock hour to its offset on the night timeline.
///
/// Clock values 5 through 11 are 5 PM through 11 PM, 12 is midnight, and
/// 1 through 4 are 1 AM through 4 AM. The mapping is not monotonic in the
/// raw clock value, which is exactly why the engine converts at the
/// boundary and never compares raw clock values.
///
/// # Arguments
///
/// * `clock_hour` - An hour on the 1-12 clock
///
/// # Returns
///
/// The offset from 5 PM (0 through 11), or `None` when the value is not
/// on the 1-12 clock at all.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::clock_to_offset;
///
/// assert_eq!(clock_to_offset(5), Some(0));   // 5 PM
/// assert_eq!(clock_to_offset(11), Some(6));  // 11 PM
/// assert_eq!(clock_to_offset(12), Some(7));  // midnight
/// assert_eq!(clock_to_offset(1), Some(8));   // 1 AM
/// assert_eq!(clock_to_offset(4), Some(11));  // 4 AM
/// assert_eq!(clock_to_offset(0), None);
/// assert_eq!(clock_to_offset(13), None);
/// ```
pub fn clock_to_offset(clock_hour: i32) -> Option<u32> {
    match clock_hour {
        5..=12 => Some((clock_hour - 5) as u32),
        1..=4 => Some((clock_hour + 7) as u32),
        _ => None,
    }
}

/// Converts a night timeline offset back to its 1-12 clock hour.
///
/// Inverse of [`clock_to_offset`] for offsets 0 through 11. Larger offsets
/// keep wrapping around the clock, which makes the exclusive end of a
/// segment printable as a clock hour too.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::offset_to_clock;
///
/// assert_eq!(offset_to_clock(0), 5);   // 5 PM
/// assert_eq!(offset_to_clock(7), 12);  // midnight
/// assert_eq!(offset_to_clock(8), 1);   // 1 AM
/// assert_eq!(offset_to_clock(11), 4);  // 4 AM
/// assert_eq!(offset_to_clock(12), 5);  // wraps
/// ```
pub fn offset_to_clock(offset: u32) -> u32 {
    (offset + 4) % 12 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // CLK-001: Evening clock values map in order from 5 PM
    // ==========================================================================
    #[test]
    fn test_clk_001_evening_hours_map_from_five_pm() {
        assert_eq!(clock_to_offset(5), Some(0));
        assert_eq!(clock_to_offset(6), Some(1));
        assert_eq!(clock_to_offset(7), Some(2));
        assert_eq!(clock_to_offset(8), Some(3));
        assert_eq!(clock_to_offset(9), Some(4));
        assert_eq!(clock_to_offset(10), Some(5));
        assert_eq!(clock_to_offset(11), Some(6));
    }

    // ==========================================================================
    // CLK-002: Midnight is clock value 12 at offset 7
    // ==========================================================================
    #[test]
    fn test_clk_002_midnight_is_offset_seven() {
        assert_eq!(clock_to_offset(12), Some(MIDNIGHT_OFFSET));
    }

    // ==========================================================================
    // CLK-003: Early-morning clock values continue past midnight
    // ==========================================================================
    #[test]
    fn test_clk_003_morning_hours_follow_midnight() {
        assert_eq!(clock_to_offset(1), Some(8));
        assert_eq!(clock_to_offset(2), Some(9));
        assert_eq!(clock_to_offset(3), Some(10));
        assert_eq!(clock_to_offset(4), Some(NIGHT_SPAN_HOURS));
    }

    // ==========================================================================
    // CLK-004: Values off the 1-12 clock are rejected
    // ==========================================================================
    #[test]
    fn test_clk_004_off_clock_values_rejected() {
        assert_eq!(clock_to_offset(0), None);
        assert_eq!(clock_to_offset(13), None);
        assert_eq!(clock_to_offset(-1), None);
        assert_eq!(clock_to_offset(17), None);
        assert_eq!(clock_to_offset(i32::MIN), None);
        assert_eq!(clock_to_offset(i32::MAX), None);
    }

    // ==========================================================================
    // CLK-005: offset_to_clock inverts clock_to_offset across the night
    // ==========================================================================
    #[test]
    fn test_clk_005_round_trip_over_the_night() {
        for clock_hour in 1..=12 {
            let offset = clock_to_offset(clock_hour).unwrap();
            assert_eq!(offset_to_clock(offset), clock_hour as u32);
        }
    }

    // ==========================================================================
    // CLK-006: Exclusive segment ends wrap around the clock
    // ==========================================================================
    #[test]
    fn test_clk_006_offsets_past_four_am_wrap() {
        // Offset 12 is the exclusive end of a full-span job, one hour past
        // 4 AM on the printed clock.
        assert_eq!(offset_to_clock(12), 5);
        assert_eq!(offset_to_clock(19), 12);
    }

    #[test]
    fn test_latest_start_offset_is_one_am() {
        assert_eq!(clock_to_offset(1), Some(LATEST_START_OFFSET));
    }

    #[test]
    fn test_night_span_matches_four_am() {
        assert_eq!(clock_to_offset(4), Some(NIGHT_SPAN_HOURS));
    }
}
