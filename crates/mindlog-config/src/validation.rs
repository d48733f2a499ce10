//! Configuration validation

use crate::schema::{RawConfig, RawJournalSettings, RawPromptSet};
use mindlog_api::{EntryKind, Theme};
use std::collections::HashSet;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown entry kind '{0}' in [[prompts]]")]
    UnknownKind(String),

    #[error("Prompts for {0} defined more than once")]
    DuplicatePromptSet(EntryKind),

    #[error("Prompts for {kind}: duplicate question id '{id}'")]
    DuplicateQuestionId { kind: EntryKind, id: String },

    #[error("Prompts for {kind}: duplicate rating label '{label}'")]
    DuplicateRating { kind: EntryKind, label: String },

    #[error("Prompts for {kind}: {message}")]
    PromptError { kind: EntryKind, message: String },

    #[error("Invalid theme '{0}' (expected \"light\" or \"dark\")")]
    InvalidTheme(String),

    #[error("Journal setting error: {0}")]
    SettingError(String),
}

/// Validate a raw configuration, collecting every problem found
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = validate_settings(&config.journal);

    let mut seen_kinds = HashSet::new();
    for set in &config.prompts {
        match set.kind.parse::<EntryKind>() {
            Ok(kind) => {
                if !seen_kinds.insert(kind) {
                    errors.push(ValidationError::DuplicatePromptSet(kind));
                }
                errors.extend(validate_prompt_set(kind, set));
            }
            Err(_) => errors.push(ValidationError::UnknownKind(set.kind.clone())),
        }
    }

    errors
}

fn validate_settings(settings: &RawJournalSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(theme) = &settings.theme
        && theme.parse::<Theme>().is_err()
    {
        errors.push(ValidationError::InvalidTheme(theme.clone()));
    }

    if settings.mood_trend_days == Some(0) {
        errors.push(ValidationError::SettingError(
            "mood_trend_days must be greater than zero".into(),
        ));
    }

    if let Some(name) = &settings.app_name
        && name.trim().is_empty()
    {
        errors.push(ValidationError::SettingError("app_name cannot be empty".into()));
    }

    errors
}

fn validate_prompt_set(kind: EntryKind, set: &RawPromptSet) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for question in &set.questions {
        if question.id.trim().is_empty() {
            errors.push(ValidationError::PromptError {
                kind,
                message: "question id cannot be empty".into(),
            });
        } else if !seen_ids.insert(question.id.as_str()) {
            errors.push(ValidationError::DuplicateQuestionId {
                kind,
                id: question.id.clone(),
            });
        }

        if question.label.trim().is_empty() {
            errors.push(ValidationError::PromptError {
                kind,
                message: format!("question '{}' has an empty label", question.id),
            });
        }
    }

    let mut seen_labels = HashSet::new();
    for label in &set.ratings {
        if label.trim().is_empty() {
            errors.push(ValidationError::PromptError {
                kind,
                message: "rating label cannot be empty".into(),
            });
        } else if !seen_labels.insert(label.as_str()) {
            errors.push(ValidationError::DuplicateRating {
                kind,
                label: label.clone(),
            });
        }
    }

    errors
}
