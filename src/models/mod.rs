//! Core data models for the Nightly Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod job;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PayLine, PayTotals,
};
pub use job::SitterJob;
