//! Shared types for the mindlog API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reflection cadence of an entry.
///
/// Decides which question and rating sets apply. Only `Daily` entries take
/// part in streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl EntryKind {
    /// All kinds, in display order
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Daily,
        EntryKind::Weekly,
        EntryKind::Monthly,
        EntryKind::Yearly,
    ];

    /// Wire name (`"DAILY"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Daily => "DAILY",
            EntryKind::Weekly => "WEEKLY",
            EntryKind::Monthly => "MONTHLY",
            EntryKind::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown entry kind: {0}")]
pub struct UnknownKindError(pub String);

impl FromStr for EntryKind {
    type Err = UnknownKindError;

    /// Case-insensitive: accepts both the wire form and config form (`daily`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(EntryKind::Daily),
            "weekly" => Ok(EntryKind::Weekly),
            "monthly" => Ok(EntryKind::Monthly),
            "yearly" => Ok(EntryKind::Yearly),
            _ => Err(UnknownKindError(s.to_string())),
        }
    }
}

/// Display theme persisted alongside the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Statistics derived from the full entry collection.
///
/// Disposable: recomputed from scratch whenever the collection changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Consecutive days ending today or yesterday
    pub current_streak: u32,

    /// Longest run of consecutive days anywhere in the history
    pub longest_streak: u32,

    /// Number of entries of every kind
    pub total_entries: usize,

    /// Most recent day with a Daily entry (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_entry_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_uppercase_wire_names() {
        let json = serde_json::to_string(&EntryKind::Monthly).unwrap();
        assert_eq!(json, "\"MONTHLY\"");

        let parsed: EntryKind = serde_json::from_str("\"YEARLY\"").unwrap();
        assert_eq!(parsed, EntryKind::Yearly);
        assert!(serde_json::from_str::<EntryKind>("\"yearly\"").is_err());
    }

    #[test]
    fn kind_from_str_is_case_insensitive() {
        assert_eq!("daily".parse::<EntryKind>().unwrap(), EntryKind::Daily);
        assert_eq!("WEEKLY".parse::<EntryKind>().unwrap(), EntryKind::Weekly);
        assert!("fortnightly".parse::<EntryKind>().is_err());
    }

    #[test]
    fn empty_stats_omit_last_entry_date() {
        let json = serde_json::to_value(UserStats::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentStreak": 0,
                "longestStreak": 0,
                "totalEntries": 0
            })
        );
    }

    #[test]
    fn last_entry_date_is_a_plain_day() {
        let stats = UserStats {
            current_streak: 2,
            longest_streak: 5,
            total_entries: 9,
            last_entry_date: NaiveDate::from_ymd_opt(2025, 6, 3),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["lastEntryDate"], "2025-06-03");
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    }
}
