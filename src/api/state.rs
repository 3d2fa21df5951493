//! Application state for the Nightly Pay Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateSchedule;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the hourly rate schedule.
#[derive(Clone)]
pub struct AppState {
    /// The rate schedule applied to every calculation.
    schedule: Arc<RateSchedule>,
}

impl AppState {
    /// Creates a new application state with the given rate schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    /// Returns a reference to the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}
