//! Request types for the Nightly Pay Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::SitterJob;

/// Request body for the `/calculate` endpoint.
///
/// Carries the three hour markers for one night of babysitting on the
/// 1-12 night clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The clock hour the job starts.
    pub start_hour: i32,
    /// The clock hour the child goes to bed.
    pub bed_hour: i32,
    /// Total whole hours worked.
    pub duration_hours: i32,
}

impl From<CalculationRequest> for SitterJob {
    fn from(req: CalculationRequest) -> Self {
        SitterJob {
            start_hour: req.start_hour,
            bed_hour: req.bed_hour,
            duration_hours: req.duration_hours,
        }
    }
}
