//! Calculation result models for the Nightly Pay Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a pay calculation, including
//! pay lines, totals, and audit traces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::RateBand;

use super::SitterJob;

/// Represents a single line item in a pay calculation.
///
/// Each pay line captures the hours worked in one rate band, the
/// applicable rate, and the resulting amount. The start and end hours are
/// printed on the 1-12 night clock, end exclusive.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::RateBand;
/// use sitter_engine::models::PayLine;
///
/// let pay_line = PayLine {
///     band: RateBand::BeforeBedtime,
///     starts_at: 5,
///     ends_at: 9,
///     hours: 4,
///     rate: 12,
///     amount: 48,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The rate band this pay line bills at.
    pub band: RateBand,
    /// The clock hour the line's span starts.
    pub starts_at: u32,
    /// The clock hour the line's span ends (exclusive).
    pub ends_at: u32,
    /// The number of hours billed on this line.
    pub hours: u32,
    /// The hourly rate for this band, in whole dollars.
    pub rate: u32,
    /// The total amount for this pay line (hours * rate).
    pub amount: u32,
}

/// Aggregated totals for a pay calculation.
///
/// This struct provides a summary of all pay components, making it easy
/// to see the overall result of a calculation.
///
/// # Example
///
/// ```
/// use sitter_engine::models::PayTotals;
///
/// let totals = PayTotals {
///     gross_pay: 76,
///     hours_before_bedtime: 5,
///     hours_after_bedtime: 2,
///     hours_after_midnight: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// The total gross pay (sum of all pay lines), in whole dollars.
    pub gross_pay: u32,
    /// Total hours billed at the before-bedtime rate.
    pub hours_before_bedtime: u32,
    /// Total hours billed at the after-bedtime rate.
    pub hours_after_bedtime: u32,
    /// Total hours billed at the after-midnight rate.
    pub hours_after_midnight: u32,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency toward the family being billed.
///
/// # Example
///
/// ```
/// use sitter_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay calculation.
///
/// This struct captures all outputs from the nightly pay engine, including
/// pay lines, totals, and a complete audit trace.
///
/// # Example
///
/// ```
/// use sitter_engine::models::{AuditTrace, CalculationResult, PayTotals, SitterJob};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     job: SitterJob::new(5, 7, 0),
///     pay_lines: vec![],
///     totals: PayTotals {
///         gross_pay: 0,
///         hours_before_bedtime: 0,
///         hours_after_bedtime: 0,
///         hours_after_midnight: 0,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The job the calculation is for, echoed back as received.
    pub job: SitterJob,
    /// Individual pay lines making up the calculation.
    pub pay_lines: Vec<PayLine>,
    /// Aggregated totals for the calculation.
    pub totals: PayTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
