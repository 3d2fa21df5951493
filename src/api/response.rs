//! Response types for the Nightly Pay Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // Messages describe the rule that was broken without echoing the
        // rejected values; callers hold their own inputs.
        match error {
            EngineError::StartTimeInvalid => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    error.code(),
                    "Start hour is outside the permissible arrival window",
                    "Arrivals are accepted between 5 PM and 1 AM on the 1-12 night clock",
                ),
            },
            EngineError::DurationInvalid => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    error.code(),
                    "Duration is negative or runs the job past 4 AM",
                    "A job spans at most the eleven hours between 5 PM and 4 AM",
                ),
            },
            EngineError::BedtimeMidnight => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    error.code(),
                    "Bedtime hour is outside the 5 PM to midnight window",
                    "Bedtime may not be scheduled past midnight",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_engine_errors_map_to_bad_request() {
        let cases = [
            (EngineError::StartTimeInvalid, "ERR_START_TIME_INVALID"),
            (EngineError::DurationInvalid, "ERR_DURATION_INVALID"),
            (EngineError::BedtimeMidnight, "ERR_BEDTIME_MIDNIGHT"),
        ];

        for (engine_error, expected_code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.error.code, expected_code);
        }
    }

    #[test]
    fn test_engine_error_messages_carry_no_values() {
        // Rule text may cite fixed clock constants like 4 AM; the rejected
        // input value itself must never appear in it.
        let rejected = [
            calculate(42, 9, 4), // start outside the arrival window
            calculate(5, 9, 42), // duration past the end of the night
            calculate(5, 42, 4), // bedtime outside the bedtime window
        ];

        for result in rejected {
            let api_error: ApiErrorResponse = result.unwrap_err().into();
            assert!(!api_error.error.message.contains("42"));
            assert!(!api_error.error.details.unwrap_or_default().contains("42"));
        }
    }
}
