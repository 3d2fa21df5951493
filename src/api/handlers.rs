//! HTTP request handlers for the Nightly Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_nightly_pay, RateBand};
use crate::models::{AuditTrace, CalculationResult, PayLine, PayTotals, SitterJob};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the three hour markers for one night of babysitting and returns
/// the calculated pay result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert the request type to the domain type
    let job: SitterJob = request.into();

    // Perform the calculation
    let start_time = Instant::now();
    match perform_calculation(&job, state.schedule()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                start_hour = job.start_hour,
                duration_hours = job.duration_hours,
                gross_pay = result.totals.gross_pay,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the nightly pay calculation for one babysitting job.
fn perform_calculation(
    job: &SitterJob,
    schedule: &crate::config::RateSchedule,
) -> Result<CalculationResult, crate::error::EngineError> {
    let start_time = Instant::now();

    let nightly = calculate_nightly_pay(job, schedule, 1)?;

    let totals = PayTotals {
        gross_pay: nightly.total_pay,
        hours_before_bedtime: band_hours(&nightly.pay_lines, RateBand::BeforeBedtime),
        hours_after_bedtime: band_hours(&nightly.pay_lines, RateBand::AfterBedtime),
        hours_after_midnight: band_hours(&nightly.pay_lines, RateBand::AfterMidnight),
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        job: *job,
        pay_lines: nightly.pay_lines,
        totals,
        audit_trace: AuditTrace {
            steps: nightly.audit_steps,
            warnings: nightly.warnings,
            duration_us,
        },
    })
}

/// Sums the billed hours across pay lines in one rate band.
fn band_hours(pay_lines: &[PayLine], band: RateBand) -> u32 {
    pay_lines
        .iter()
        .filter(|pl| pl.band == band)
        .map(|pl| pl.hours)
        .sum()
}
