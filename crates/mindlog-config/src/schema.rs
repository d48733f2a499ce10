//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Journal-wide settings
    #[serde(default)]
    pub journal: RawJournalSettings,

    /// Question/rating sets overriding the built-in ones
    #[serde(default)]
    pub prompts: Vec<RawPromptSet>,
}

/// Journal-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawJournalSettings {
    /// "light" or "dark"
    pub theme: Option<String>,

    /// Number of most recent moods shown in the trend (default: 14)
    pub mood_trend_days: Option<usize>,

    /// Application identifier written into exports (default: "MindLog")
    pub app_name: Option<String>,
}

/// Prompts for one entry kind
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPromptSet {
    /// "daily", "weekly", "monthly" or "yearly"
    pub kind: String,

    #[serde(default)]
    pub questions: Vec<RawQuestion>,

    /// Self-assessment rating labels
    #[serde(default)]
    pub ratings: Vec<String>,
}

/// A single question
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawQuestion {
    /// Stable key used in entry responses
    pub id: String,

    pub label: String,

    pub placeholder: Option<String>,
}
