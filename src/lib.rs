//! Nightly Pay Engine for babysitting jobs
//!
//! This crate calculates a babysitter's pay for one night of work on the
//! 1-12 night clock, splitting the worked hours across the before-bedtime,
//! after-bedtime, and after-midnight rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

pub use calculation::calculate;
