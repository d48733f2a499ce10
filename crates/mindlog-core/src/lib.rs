//! Core statistics engine and journal session for mindlog
//!
//! This crate is the heart of mindlog, containing:
//! - Streak statistics over the Daily entries (current and longest streak)
//! - Insights (mood trend, average mood, entry distribution)
//! - History filtering and previews
//! - The journal session that owns the entries and keeps stats current

mod events;
mod history;
mod insights;
mod journal;
mod stats;

pub use events::*;
pub use history::*;
pub use insights::*;
pub use journal::*;
pub use stats::*;
