//! Error types for mindlog

use thiserror::Error;

use crate::EntryId;

/// Core error type for journal operations
#[derive(Debug, Error)]
pub enum MindlogError {
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Duplicate entry ID: {0}")]
    DuplicateEntry(EntryId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MindlogError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MindlogError>;
