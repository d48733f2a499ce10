//! Validated journal configuration

use crate::defaults::{DEFAULT_MOOD_TREND_DAYS, builtin_prompts};
use crate::schema::{RawConfig, RawJournalSettings, RawPromptSet};
use mindlog_api::{APP_NAME, EntryKind, Theme};
use std::collections::BTreeMap;

static NO_PROMPTS: PromptSet = PromptSet {
    questions: Vec::new(),
    ratings: Vec::new(),
};

/// Validated configuration ready for use by the journal
#[derive(Debug, Clone, PartialEq)]
pub struct JournalConfig {
    pub settings: JournalSettings,

    /// Prompts for every kind (built-ins fill any kind not configured)
    prompts: BTreeMap<EntryKind, PromptSet>,
}

impl JournalConfig {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let mut prompts: BTreeMap<EntryKind, PromptSet> = EntryKind::ALL
            .iter()
            .map(|kind| (*kind, builtin_prompts(*kind)))
            .collect();

        for set in raw.prompts {
            // Unknown kinds were rejected by validation
            if let Ok(kind) = set.kind.parse::<EntryKind>() {
                prompts.insert(kind, PromptSet::from_raw(set));
            }
        }

        Self {
            settings: JournalSettings::from_raw(raw.journal),
            prompts,
        }
    }

    /// Question and rating set for an entry kind
    pub fn prompts_for(&self, kind: EntryKind) -> &PromptSet {
        self.prompts.get(&kind).unwrap_or(&NO_PROMPTS)
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            settings: JournalSettings::default(),
            prompts: EntryKind::ALL
                .iter()
                .map(|kind| (*kind, builtin_prompts(*kind)))
                .collect(),
        }
    }
}

/// Journal-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSettings {
    pub theme: Theme,
    pub mood_trend_days: usize,
    pub app_name: String,
}

impl JournalSettings {
    fn from_raw(raw: RawJournalSettings) -> Self {
        Self {
            theme: raw
                .theme
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            mood_trend_days: raw.mood_trend_days.unwrap_or(DEFAULT_MOOD_TREND_DAYS),
            app_name: raw.app_name.unwrap_or_else(|| APP_NAME.to_string()),
        }
    }
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            mood_trend_days: DEFAULT_MOOD_TREND_DAYS,
            app_name: APP_NAME.to_string(),
        }
    }
}

/// Questions and rating labels that apply to one entry kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSet {
    pub questions: Vec<Question>,
    pub ratings: Vec<String>,
}

impl PromptSet {
    fn from_raw(raw: RawPromptSet) -> Self {
        Self {
            questions: raw
                .questions
                .into_iter()
                .map(|q| Question {
                    id: q.id,
                    label: q.label,
                    placeholder: q.placeholder,
                })
                .collect(),
            ratings: raw.ratings,
        }
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub label: String,
    pub placeholder: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawQuestion;

    #[test]
    fn unconfigured_kinds_keep_builtins() {
        let raw = RawConfig {
            config_version: 1,
            journal: RawJournalSettings::default(),
            prompts: vec![RawPromptSet {
                kind: "yearly".into(),
                questions: vec![RawQuestion {
                    id: "theme".into(),
                    label: "Theme of the year".into(),
                    placeholder: None,
                }],
                ratings: vec!["Growth".into()],
            }],
        };

        let config = JournalConfig::from_raw(raw);
        let yearly = config.prompts_for(EntryKind::Yearly);
        assert_eq!(yearly.questions.len(), 1);
        assert_eq!(yearly.ratings, vec!["Growth".to_string()]);
        assert_eq!(config.prompts_for(EntryKind::Daily), &builtin_prompts(EntryKind::Daily));
    }

    #[test]
    fn settings_defaults() {
        let config = JournalConfig::default();
        assert_eq!(config.settings.theme, Theme::Light);
        assert_eq!(config.settings.mood_trend_days, 14);
        assert_eq!(config.settings.app_name, "MindLog");
    }

    #[test]
    fn question_lookup() {
        let config = JournalConfig::default();
        let daily = config.prompts_for(EntryKind::Daily);
        assert_eq!(daily.question("good").map(|q| q.label.as_str()), Some("One good thing from today"));
        assert!(daily.question("nope").is_none());
    }
}
