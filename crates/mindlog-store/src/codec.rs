//! Export documents and state snapshots

use chrono::{DateTime, NaiveDate, Utc};
use mindlog_api::{
    EXPORT_FORMAT_VERSION, ExportDocument, PersistedStats, StateSnapshot, Theme, UserStats,
};
use mindlog_util::{format_day, format_timestamp};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::{Entry, EntryCollection, StoreError, StoreResult};

/// Wrap a collection into an export document
pub fn export_document(
    entries: &EntryCollection,
    app: &str,
    exported_at: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        app: app.to_string(),
        version: EXPORT_FORMAT_VERSION,
        exported_at: format_timestamp(&exported_at),
        entries: entries.to_records(),
    }
}

/// Pretty-printed JSON of an export document
pub fn export_json(document: &ExportDocument) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Suggested file name for an export made on `day`
pub fn export_file_name(day: NaiveDate) -> String {
    format!("mindlog_export_{}.json", format_day(day))
}

/// Read an export document back into a collection.
///
/// Strict: the first invalid record or duplicate id fails the whole import.
pub fn import_document(document: ExportDocument) -> StoreResult<EntryCollection> {
    if document.version > EXPORT_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(document.version));
    }

    let entries = document
        .entries
        .into_iter()
        .map(Entry::try_from)
        .collect::<StoreResult<Vec<_>>>()?;

    let collection = EntryCollection::from_entries(entries)?;
    info!(entry_count = collection.len(), app = %document.app, "Export imported");
    Ok(collection)
}

/// Parse and import an export document from JSON
pub fn import_json(json: &str) -> StoreResult<EntryCollection> {
    let document: ExportDocument = serde_json::from_str(json)?;
    import_document(document)
}

/// Persistable form of the whole journal state
pub fn snapshot_of(entries: &EntryCollection, stats: &UserStats, theme: Theme) -> StateSnapshot {
    StateSnapshot {
        entries: entries.to_records(),
        stats: PersistedStats::from(stats),
        theme,
    }
}

/// Journal state rebuilt from a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredState {
    pub entries: EntryCollection,
    pub theme: Theme,

    /// Records dropped because they could not be converted or repeated an id
    pub skipped: usize,
}

/// Rebuild journal state from a snapshot.
///
/// Lenient: a record whose target date no longer parses is kept (it simply
/// never counts toward a streak); any other invalid record, and any repeat
/// of an id already seen, is skipped with a warning. Stored stats are ignored.
pub fn restore_snapshot(snapshot: StateSnapshot) -> RestoredState {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(snapshot.entries.len());
    let mut skipped = 0;

    for record in snapshot.entries {
        let id = record.id.clone();
        match Entry::from_record_lenient(record) {
            Ok(entry) => {
                if !seen.insert(entry.id.clone()) {
                    warn!(entry_id = %entry.id, "Duplicate entry id in snapshot, keeping first");
                    skipped += 1;
                    continue;
                }
                if entry.date.is_malformed() {
                    warn!(entry_id = %entry.id, "Entry date is unparseable, excluded from streaks");
                }
                entries.push(entry);
            }
            Err(e) => {
                warn!(entry_id = %id, error = %e, "Skipping invalid entry in snapshot");
                skipped += 1;
            }
        }
    }

    info!(entry_count = entries.len(), skipped, "Snapshot restored");

    RestoredState {
        entries: EntryCollection::from_unchecked(entries),
        theme: snapshot.theme,
        skipped,
    }
}

/// Any JSON file the journal can be loaded from
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JournalFile {
    Export(ExportDocument),
    Snapshot(StateSnapshot),
}

impl JournalFile {
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and detect a journal file on disk
    pub fn read(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let file = Self::from_json(&json)?;
        debug!(path = %path.display(), "Journal file read");
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mindlog_api::{EntryKind, EntryRecord};
    use std::collections::BTreeMap;

    fn record(id: &str, date: &str) -> EntryRecord {
        EntryRecord {
            id: id.into(),
            kind: EntryKind::Daily,
            date: date.into(),
            mood: Some(5),
            responses: BTreeMap::new(),
            ratings: None,
            created_at: "2025-06-01T20:00:00.000Z".into(),
            updated_at: "2025-06-01T20:00:00.000Z".into(),
        }
    }

    fn document(entries: Vec<EntryRecord>) -> ExportDocument {
        ExportDocument {
            app: "MindLog".into(),
            version: 1,
            exported_at: "2025-06-02T09:00:00.000Z".into(),
            entries,
        }
    }

    #[test]
    fn export_wraps_records() {
        let collection = import_document(document(vec![record("a", "2025-06-01")])).unwrap();
        let exported_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

        let doc = export_document(&collection, "MindLog", exported_at);
        assert_eq!(doc.exported_at, "2025-06-02T09:00:00.000Z");
        assert_eq!(doc.version, EXPORT_FORMAT_VERSION);
        assert_eq!(doc.entries.len(), 1);
        // bare date normalized to the stored date-time form
        assert_eq!(doc.entries[0].date, "2025-06-01T00:00:00.000Z");

        let json = export_json(&doc).unwrap();
        assert!(json.contains("\"exportedAt\""));
        assert_eq!(import_json(&json).unwrap(), collection);
    }

    #[test]
    fn import_fails_fast() {
        let bad = document(vec![record("a", "2025-06-01"), record("b", "not a date")]);
        assert!(matches!(import_document(bad), Err(StoreError::InvalidEntry { .. })));

        let dup = document(vec![record("a", "2025-06-01"), record("a", "2025-06-02")]);
        assert!(matches!(import_document(dup), Err(StoreError::DuplicateId(_))));
    }

    #[test]
    fn import_rejects_newer_versions() {
        let mut doc = document(vec![]);
        doc.version = EXPORT_FORMAT_VERSION + 1;
        assert!(matches!(import_document(doc), Err(StoreError::UnsupportedVersion(2))));
    }

    #[test]
    fn restore_keeps_malformed_dates_and_skips_the_rest() {
        let mut out_of_range = record("c", "2025-06-03");
        out_of_range.mood = Some(42);

        let snapshot = StateSnapshot {
            entries: vec![
                record("a", "2025-06-01"),
                record("b", "Invalid Date"),
                out_of_range,
                record("a", "2025-06-04"),
            ],
            stats: PersistedStats::default(),
            theme: Theme::Dark,
        };

        let restored = restore_snapshot(snapshot);
        assert_eq!(restored.entries.len(), 2);
        assert_eq!(restored.skipped, 2);
        assert_eq!(restored.theme, Theme::Dark);
        assert!(restored.entries.iter().any(|e| e.date.is_malformed()));
    }

    #[test]
    fn journal_file_detects_shape() {
        let export = r#"{ "app": "MindLog", "exportedAt": "2025-06-02T09:00:00.000Z", "entries": [] }"#;
        assert!(matches!(JournalFile::from_json(export).unwrap(), JournalFile::Export(_)));

        let snapshot = r#"{ "entries": [], "stats": { "currentStreak": 0, "longestStreak": 0, "totalEntries": 0 }, "theme": "dark" }"#;
        assert!(matches!(JournalFile::from_json(snapshot).unwrap(), JournalFile::Snapshot(_)));
    }

    /// Saved state as the web app writes it: no version, moods omitted
    /// rather than null, and a human-readable `lastEntryDate`
    const WEB_APP_STATE: &str = r#"{
        "entries": [
            {
                "id": "c2b7e0a4-1d3f-4e59-9a61-0f3c5b8d2e17",
                "type": "DAILY",
                "date": "2025-06-03T19:42:10.512Z",
                "mood": 8,
                "responses": { "did": "Finished the chapter", "good": "Dinner with friends" },
                "createdAt": "2025-06-03T19:42:10.512Z",
                "updatedAt": "2025-06-03T19:42:10.512Z"
            },
            {
                "id": "5e0d9c61-7a2b-4f8e-b3c4-2a9e6f1d7b05",
                "type": "DAILY",
                "date": "2025-06-02T21:05:00.000Z",
                "responses": { "did": "" },
                "createdAt": "2025-06-02T21:05:00.000Z",
                "updatedAt": "2025-06-02T21:06:30.000Z"
            },
            {
                "id": "9b1f2a3c-4d5e-4f60-8a7b-1c2d3e4f5a6b",
                "type": "WEEKLY",
                "date": "2025-06-01T10:00:00.000Z",
                "responses": { "win": "Kept the streak" },
                "ratings": { "Effort": 8, "Discipline": 7, "Mindset": 9 },
                "createdAt": "2025-06-01T10:00:00.000Z",
                "updatedAt": "2025-06-01T10:00:00.000Z"
            }
        ],
        "stats": {
            "currentStreak": 2,
            "longestStreak": 2,
            "totalEntries": 3,
            "lastEntryDate": "Tue Jun 03 2025"
        },
        "theme": "dark"
    }"#;

    #[test]
    fn web_app_state_restores() {
        let JournalFile::Snapshot(snapshot) = JournalFile::from_json(WEB_APP_STATE).unwrap() else {
            panic!("saved state detected as an export");
        };
        assert_eq!(snapshot.stats.last_entry_date.as_deref(), Some("Tue Jun 03 2025"));

        let restored = restore_snapshot(snapshot);
        assert_eq!(restored.entries.len(), 3);
        assert_eq!(restored.skipped, 0);
        assert_eq!(restored.theme, Theme::Dark);

        let weekly = restored
            .entries
            .iter()
            .find(|e| e.kind == EntryKind::Weekly)
            .unwrap();
        assert!(weekly.mood.is_none());
        assert_eq!(weekly.ratings.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn unreadable_stored_last_entry_date_is_ignored() {
        let json = WEB_APP_STATE.replace("Tue Jun 03 2025", "Invalid Date");
        let JournalFile::Snapshot(snapshot) = JournalFile::from_json(&json).unwrap() else {
            panic!("saved state detected as an export");
        };
        assert_eq!(restore_snapshot(snapshot).entries.len(), 3);
    }

    #[test]
    fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, WEB_APP_STATE).unwrap();
        assert!(matches!(JournalFile::read(&path).unwrap(), JournalFile::Snapshot(_)));

        assert!(matches!(
            JournalFile::read(dir.path().join("absent.json")),
            Err(StoreError::Io(_))
        ));
    }

    #[test]
    fn export_file_name_uses_day() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(export_file_name(day), "mindlog_export_2025-06-02.json");
    }
}
