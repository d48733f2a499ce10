//! Stored and exported record shapes

use mindlog_util::format_day;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{EntryKind, EXPORT_FORMAT_VERSION, Theme, UserStats};

/// One entry as it is persisted or exported.
///
/// Dates stay strings and scores stay plain integers here; turning a record
/// into a validated entry is the store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Day the reflection is about, ISO-8601 date-time
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<i64>,

    /// Question id -> answer
    #[serde(default)]
    pub responses: BTreeMap<String, String>,

    /// Rating label -> score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<BTreeMap<String, i64>>,

    pub created_at: String,
    pub updated_at: String,
}

/// Export file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Application identifier
    pub app: String,

    /// Format version; older exports carry none and are version 1
    #[serde(default = "default_export_version")]
    pub version: u32,

    pub exported_at: String,

    pub entries: Vec<EntryRecord>,
}

fn default_export_version() -> u32 {
    EXPORT_FORMAT_VERSION
}

/// Whole persisted application state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(default)]
    pub entries: Vec<EntryRecord>,

    /// Last computed stats. Informational only: recomputed on restore.
    #[serde(default)]
    pub stats: PersistedStats,

    #[serde(default)]
    pub theme: Theme,
}

/// Stats as found in a saved state.
///
/// Older saves wrote `lastEntryDate` in a human-readable form
/// (`"Tue Jun 03 2025"`), so the day is carried as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_entries: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_entry_date: Option<String>,
}

impl From<&UserStats> for PersistedStats {
    fn from(stats: &UserStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            total_entries: stats.total_entries,
            last_entry_date: stats
                .last_entry_date
                .map(format_day),
        }
    }
}
