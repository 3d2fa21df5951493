//! HTTP API module for the Nightly Pay Engine.
//!
//! This module provides the REST API endpoint for calculating a
//! babysitter's pay for one night of work.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
