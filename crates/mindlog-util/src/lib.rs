//! Shared utilities for mindlog
//!
//! This crate provides:
//! - ID types (EntryId)
//! - Time utilities (mockable wall clock, calendar-day math, timestamp parsing)
//! - Error types
//! - Default paths for the configuration file

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
