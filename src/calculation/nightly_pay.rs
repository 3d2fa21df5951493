//! Nightly pay calculation functionality.
//!
//! This module provides the calculation for a full night of babysitting.
//! A night is validated, segmented at the bedtime and midnight boundaries,
//! and each segment is billed at its band's hourly rate, with an audit
//! trail recording every decision.

use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, PayLine, SitterJob};

use super::clock::offset_to_clock;
use super::rate_band::{NightSegment, RateBand, segment_by_band};
use super::validation::validate_job;

/// The result of a nightly pay calculation, including pay lines and audit steps.
///
/// For jobs spanning the bedtime or midnight boundary, this result contains
/// a pay line for each rate band with the appropriate rate applied.
#[derive(Debug, Clone)]
pub struct NightlyPayResult {
    /// The pay lines for each rate band the job touches.
    pub pay_lines: Vec<PayLine>,
    /// The audit steps recording this calculation, including segmentation and per-band pricing.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings for conditions worth flagging but not fatal.
    pub warnings: Vec<AuditWarning>,
    /// The total pay across all bands, in whole dollars.
    pub total_pay: u32,
}

/// Calculates pay for one night of babysitting.
///
/// This function:
/// 1. Validates the job's hour markers with [`validate_job`]
/// 2. Segments the worked span at rate boundaries using [`segment_by_band`]
/// 3. Bills each segment at its band's hourly rate from the schedule
/// 4. Generates an audit trail showing validation, segmentation, and
///    per-band pricing
///
/// # Arguments
///
/// * `job` - The job to calculate pay for
/// * `schedule` - The rate schedule to bill against
/// * `start_step_number` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// Returns a [`NightlyPayResult`] containing pay lines for each band and
/// audit steps, or an error if validation rejects the hour markers.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::calculate_nightly_pay;
/// use sitter_engine::config::RateSchedule;
/// use sitter_engine::models::SitterJob;
///
/// // 7 PM to 1 AM with a 9 PM bedtime touches all three bands
/// let job = SitterJob::new(7, 9, 6);
/// let result = calculate_nightly_pay(&job, &RateSchedule::standard(), 1).unwrap();
///
/// assert_eq!(result.pay_lines.len(), 3);
/// assert_eq!(result.total_pay, 64);
/// ```
pub fn calculate_nightly_pay(
    job: &SitterJob,
    schedule: &RateSchedule,
    start_step_number: u32,
) -> EngineResult<NightlyPayResult> {
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut current_step = start_step_number;

    // Step 1: Validate the hour markers
    let night = validate_job(job)?;

    let validation_step = AuditStep {
        step_number: current_step,
        rule_id: "marker_validation".to_string(),
        rule_name: "Hour Marker Validation".to_string(),
        input: serde_json::json!({
            "start_hour": job.start_hour,
            "bed_hour": job.bed_hour,
            "duration_hours": job.duration_hours
        }),
        output: serde_json::json!({
            "start_offset": night.start_offset,
            "bedtime_offset": night.bedtime_offset,
            "duration_hours": night.duration_hours
        }),
        reasoning: "All hour markers fall within the 5 PM to 4 AM window".to_string(),
    };
    audit_steps.push(validation_step);
    current_step += 1;

    if night.bedtime_offset <= night.start_offset && night.duration_hours > 0 {
        warnings.push(AuditWarning {
            code: "BEDTIME_BEFORE_START".to_string(),
            message: "Bedtime falls at or before the start hour; no hours bill at the before-bedtime rate".to_string(),
            severity: "low".to_string(),
        });
    }

    // Step 2: Segment the span by rate band boundaries
    let segments = segment_by_band(&night);

    let segment_descriptions: Vec<serde_json::Value> = segments
        .iter()
        .map(|s| {
            serde_json::json!({
                "band": format!("{}", s.band),
                "hours": s.hours,
                "starts_at": offset_to_clock(s.start_offset),
                "ends_at": offset_to_clock(s.end_offset)
            })
        })
        .collect();

    let segmentation_step = AuditStep {
        step_number: current_step,
        rule_id: "band_segmentation".to_string(),
        rule_name: "Rate Band Segmentation".to_string(),
        input: serde_json::json!({
            "start_hour": job.start_hour,
            "bed_hour": job.bed_hour,
            "duration_hours": night.duration_hours
        }),
        output: serde_json::json!({
            "segment_count": segments.len(),
            "segments": segment_descriptions
        }),
        reasoning: match segments.len() {
            0 => "Zero-hour job: nothing to bill".to_string(),
            1 => format!(
                "Job stays within the {} band - no rate boundary crossed",
                segments[0].band
            ),
            n => format!(
                "Job crosses a rate boundary: split into {} segments ({})",
                n,
                segments
                    .iter()
                    .map(|s| format!("{}: {}h", s.band, s.hours))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
    };
    audit_steps.push(segmentation_step);
    current_step += 1;

    // Step 3: Bill each segment at its band's rate
    let mut pay_lines = Vec::new();
    let mut total_pay = 0;

    for segment in &segments {
        let (pay_line, segment_audit) = calculate_segment_pay(segment, schedule, current_step);

        total_pay += pay_line.amount;
        pay_lines.push(pay_line);
        audit_steps.push(segment_audit);
        current_step += 1;
    }

    // Step 4: Create summary audit step
    let summary_step = AuditStep {
        step_number: current_step,
        rule_id: "nightly_total".to_string(),
        rule_name: "Nightly Total Calculation".to_string(),
        input: serde_json::json!({
            "segment_count": pay_lines.len(),
            "segment_amounts": pay_lines.iter().map(|p| p.amount).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_pay": total_pay,
            "total_hours": night.duration_hours
        }),
        reasoning: format!(
            "Total nightly pay: {} segment(s) = ${}",
            pay_lines.len(),
            total_pay
        ),
    };
    audit_steps.push(summary_step);

    Ok(NightlyPayResult {
        pay_lines,
        audit_steps,
        warnings,
        total_pay,
    })
}

/// Bills a single segment at its band's hourly rate.
///
/// Returns the pay line and audit step for the segment.
fn calculate_segment_pay(
    segment: &NightSegment,
    schedule: &RateSchedule,
    step_number: u32,
) -> (PayLine, AuditStep) {
    let (rate, rule_id, rule_name) = match segment.band {
        RateBand::BeforeBedtime => (schedule.start_rate, "before_bedtime_rate", "Before Bedtime Rate"),
        RateBand::AfterBedtime => (schedule.bed_rate, "after_bedtime_rate", "After Bedtime Rate"),
        RateBand::AfterMidnight => (
            schedule.midnight_rate,
            "after_midnight_rate",
            "After Midnight Rate",
        ),
    };

    let amount = segment.hours * rate;

    let pay_line = PayLine {
        band: segment.band,
        starts_at: offset_to_clock(segment.start_offset),
        ends_at: offset_to_clock(segment.end_offset),
        hours: segment.hours,
        rate,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "band": format!("{}", segment.band),
            "hours": segment.hours,
            "rate": rate
        }),
        output: serde_json::json!({
            "amount": amount
        }),
        reasoning: format!(
            "{}: {} hours × ${} = ${}",
            segment.band, segment.hours, rate, amount
        ),
    };

    (pay_line, audit_step)
}

/// Calculates total pay for a night at the standard 12/8/16 schedule.
///
/// The plain entry point when only the number matters: takes the three
/// hour markers on the 1-12 night clock and returns the total pay in
/// whole dollars.
///
/// # Arguments
///
/// * `start_hour` - The clock hour the job starts (5 PM through 1 AM)
/// * `bed_hour` - The clock hour the child goes to bed (5 PM through midnight)
/// * `duration_hours` - Total whole hours worked
///
/// # Returns
///
/// The total pay in whole dollars, or the error for the first failed
/// validation check.
///
/// # Examples
///
/// ```
/// use sitter_engine::calculate;
///
/// // Four hours before a 9 PM bedtime at $12/hr
/// assert_eq!(calculate(5, 9, 4), Ok(48));
///
/// // A job touching all three rate bands
/// assert_eq!(calculate(7, 9, 6), Ok(64));
///
/// // Zero hours bill zero dollars
/// assert_eq!(calculate(5, 9, 0), Ok(0));
/// ```
///
/// Invalid markers fail with a stable error code:
///
/// ```
/// use sitter_engine::calculate;
/// use sitter_engine::error::EngineError;
///
/// assert_eq!(calculate(4, 9, 10), Err(EngineError::StartTimeInvalid));
/// assert_eq!(calculate(5, 9, 12), Err(EngineError::DurationInvalid));
/// assert_eq!(calculate(5, 1, 10), Err(EngineError::BedtimeMidnight));
/// ```
pub fn calculate(start_hour: i32, bed_hour: i32, duration_hours: i32) -> EngineResult<u32> {
    let job = SitterJob::new(start_hour, bed_hour, duration_hours);
    let result = calculate_nightly_pay(&job, &RateSchedule::standard(), 1)?;
    Ok(result.total_pay)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::calculation::clock::{clock_to_offset, NIGHT_SPAN_HOURS};
    use crate::error::EngineError;
    use proptest::prelude::*;

    fn valid_start() -> impl Strategy<Value = i32> {
        prop_oneof![5i32..=12, Just(1i32)]
    }

    fn valid_bed() -> impl Strategy<Value = i32> {
        5i32..=12
    }

    proptest! {
        /// Zero duration pays zero for every valid pair of markers
        #[test]
        fn zero_duration_pays_zero(start in valid_start(), bed in valid_bed()) {
            prop_assert_eq!(calculate(start, bed, 0), Ok(0));
        }

        /// Valid markers either price the night or reject the overrun,
        /// never anything else
        #[test]
        fn valid_markers_price_or_reject_overrun(
            start in valid_start(),
            bed in valid_bed(),
            duration in 0i32..=11
        ) {
            let start_offset = clock_to_offset(start).unwrap();
            match calculate(start, bed, duration) {
                Ok(total) => {
                    prop_assert!(start_offset + duration as u32 <= NIGHT_SPAN_HOURS);
                    // 7 hours at $12 plus 4 at $16 is the ceiling
                    prop_assert!(total <= 148);
                }
                Err(e) => {
                    prop_assert_eq!(e, EngineError::DurationInvalid);
                    prop_assert!(start_offset + duration as u32 > NIGHT_SPAN_HOURS);
                }
            }
        }

        /// Identical inputs always produce identical output
        #[test]
        fn calculation_is_deterministic(
            start in valid_start(),
            bed in valid_bed(),
            duration in 0i32..=11
        ) {
            prop_assert_eq!(
                calculate(start, bed, duration),
                calculate(start, bed, duration)
            );
        }

        /// Pay lines always sum to the reported total
        #[test]
        fn pay_lines_sum_to_total(
            start in valid_start(),
            bed in valid_bed(),
            duration in 0i32..=11
        ) {
            let job = SitterJob::new(start, bed, duration);
            if let Ok(result) = calculate_nightly_pay(&job, &RateSchedule::standard(), 1) {
                let line_sum: u32 = result.pay_lines.iter().map(|p| p.amount).sum();
                prop_assert_eq!(result.total_pay, line_sum);
            }
        }

        /// Arrivals between 2 AM and 4 AM are always rejected
        #[test]
        fn late_morning_arrivals_rejected(
            start in 2i32..=4,
            bed in valid_bed(),
            duration in 0i32..=11
        ) {
            prop_assert_eq!(
                calculate(start, bed, duration),
                Err(EngineError::StartTimeInvalid)
            );
        }

        /// Morning bedtimes are always rejected
        #[test]
        fn morning_bedtimes_rejected(
            start in valid_start(),
            bed in 1i32..=4,
            duration in 1i32..=3
        ) {
            prop_assert_eq!(
                calculate(start, bed, duration),
                Err(EngineError::BedtimeMidnight)
            );
        }
    }
}
