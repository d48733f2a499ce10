//! Serialization boundary for mindlog
//!
//! This crate defines the shapes shared between the journal core and whatever
//! persists or displays it:
//! - Entry kinds and entry records (the stored/exported form of an entry)
//! - Export documents and persisted state snapshots
//! - Derived statistics
//! - Versioning

mod records;
mod types;

pub use records::*;
pub use types::*;

/// Application identifier written into export documents
pub const APP_NAME: &str = "MindLog";

/// Current export document format version
pub const EXPORT_FORMAT_VERSION: u32 = 1;
