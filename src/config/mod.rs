//! Rate configuration for the Nightly Pay Engine.
//!
//! This module provides the rate schedule applied to a night of work. The
//! engine reads no files and no environment: the standard schedule is a set
//! of in-code constants.
//!
//! # Example
//!
//! ```
//! use sitter_engine::config::RateSchedule;
//!
//! let schedule = RateSchedule::standard();
//! println!("Before-bedtime rate: ${}/hr", schedule.start_rate);
//! ```

mod schedule;

pub use schedule::{
    RateSchedule, STANDARD_BED_RATE, STANDARD_MIDNIGHT_RATE, STANDARD_START_RATE,
};
