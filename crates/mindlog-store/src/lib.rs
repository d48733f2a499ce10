//! Entry store for mindlog
//!
//! Provides:
//! - The validated entry model (scores, target dates, timestamps)
//! - The entry collection and its invariants (unique ids, immutable kind)
//! - Strict import and export of export documents
//! - Lenient restore of persisted state snapshots

mod codec;
mod collection;
mod entry;

pub use codec::*;
pub use collection::*;
pub use entry::*;

use mindlog_util::EntryId;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid entry '{id}': {reason}")]
    InvalidEntry { id: String, reason: String },

    #[error("Duplicate entry ID: {0}")]
    DuplicateId(EntryId),

    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    #[error("Entry '{id}': {field} cannot change after creation")]
    ImmutableField { id: EntryId, field: &'static str },

    #[error("Unsupported export version: {0}")]
    UnsupportedVersion(u32),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for mindlog_util::MindlogError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => mindlog_util::MindlogError::EntryNotFound(id),
            StoreError::DuplicateId(id) => mindlog_util::MindlogError::DuplicateEntry(id),
            StoreError::InvalidEntry { .. } | StoreError::ImmutableField { .. } => {
                mindlog_util::MindlogError::validation(e.to_string())
            }
            other => mindlog_util::MindlogError::store(other.to_string()),
        }
    }
}
