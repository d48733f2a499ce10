//! Journal session
//!
//! Owns the entries, the current stats and the theme. Every mutation
//! recomputes the stats wholesale as of the moment the caller passes in, so
//! the stats never drift from the entries they describe.

use chrono::{DateTime, TimeZone, Utc};
use mindlog_api::{
    APP_NAME, EntryKind, ExportDocument, PersistedStats, StateSnapshot, Theme, UserStats,
};
use mindlog_config::JournalSettings;
use mindlog_store::{
    Entry, EntryCollection, EntryDate, Score, export_document, restore_snapshot, snapshot_of,
};
use mindlog_util::{EntryId, MindlogError, Result};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::{JournalEvent, compute_stats};

/// Content of a new entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub date: DateTime<Utc>,
    pub mood: Option<Score>,
    pub responses: BTreeMap<String, String>,
    pub ratings: Option<BTreeMap<String, Score>>,
}

impl EntryDraft {
    pub fn new(kind: EntryKind, date: DateTime<Utc>) -> Self {
        Self {
            kind,
            date,
            mood: None,
            responses: BTreeMap::new(),
            ratings: None,
        }
    }
}

/// Replacement content for an existing entry.
///
/// Answers, mood and ratings replace the stored ones. The target date is
/// only changed when `date` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryEdit {
    pub date: Option<DateTime<Utc>>,
    pub mood: Option<Score>,
    pub responses: BTreeMap<String, String>,
    pub ratings: Option<BTreeMap<String, Score>>,
}

impl From<&Entry> for EntryEdit {
    fn from(entry: &Entry) -> Self {
        Self {
            date: None,
            mood: entry.mood,
            responses: entry.responses.clone(),
            ratings: entry.ratings.clone(),
        }
    }
}

/// A user's journal
#[derive(Debug, Clone)]
pub struct Journal {
    entries: EntryCollection,
    stats: UserStats,
    theme: Theme,
    app_name: String,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            entries: EntryCollection::new(),
            stats: UserStats::default(),
            theme: Theme::default(),
            app_name: APP_NAME.to_string(),
        }
    }
}

impl Journal {
    /// Empty journal using the configured theme and app name
    pub fn new(settings: &JournalSettings) -> Self {
        Self {
            theme: settings.theme,
            app_name: settings.app_name.clone(),
            ..Self::default()
        }
    }

    /// Journal over an already validated collection, e.g. an imported export
    pub fn from_entries<Tz: TimeZone>(entries: EntryCollection, now: &DateTime<Tz>) -> Self {
        let stats = compute_stats(entries.as_slice(), now);
        Self {
            entries,
            stats,
            ..Self::default()
        }
    }

    /// Rebuild a journal from a persisted snapshot.
    ///
    /// The stats stored in the snapshot are discarded and recomputed.
    pub fn restore<Tz: TimeZone>(snapshot: StateSnapshot, now: &DateTime<Tz>) -> Self {
        let stored_stats = snapshot.stats.clone();
        let restored = restore_snapshot(snapshot);
        let stats = compute_stats(restored.entries.as_slice(), now);

        if PersistedStats::from(&stats) != stored_stats {
            debug!(?stored_stats, ?stats, "Stored stats were stale");
        }
        if restored.skipped > 0 {
            warn!(skipped = restored.skipped, "Some entries could not be restored");
        }

        Self {
            entries: restored.entries,
            stats,
            theme: restored.theme,
            ..Self::default()
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Save a new entry
    pub fn create_entry<Tz: TimeZone>(
        &mut self,
        draft: EntryDraft,
        now: &DateTime<Tz>,
    ) -> Result<JournalEvent> {
        let now_utc = now.with_timezone(&Utc);
        let mut entry = Entry::new(draft.kind, draft.date, now_utc);
        entry.mood = draft.mood;
        entry.responses = draft.responses;
        entry.ratings = draft.ratings;

        let entry_id = entry.id.clone();
        let kind = entry.kind;
        self.entries.insert(entry)?;
        self.recompute(now);

        info!(entry_id = %entry_id, kind = %kind, "Entry created");

        Ok(JournalEvent::EntryCreated {
            entry_id,
            kind,
            stats: self.stats.clone(),
        })
    }

    /// Edit an existing entry; kind and creation time are kept.
    ///
    /// A restored entry whose date never parsed can only be edited together
    /// with a new `date`; otherwise the edit is rejected and the entry is
    /// left as it was. Deleting it always works.
    pub fn update_entry<Tz: TimeZone>(
        &mut self,
        id: &EntryId,
        edit: EntryEdit,
        now: &DateTime<Tz>,
    ) -> Result<JournalEvent> {
        let current = self
            .entries
            .get(id)
            .ok_or_else(|| MindlogError::EntryNotFound(id.clone()))?;

        let mut edited = current.clone();
        if let Some(date) = edit.date {
            edited.date = EntryDate::At(date);
        }
        edited.mood = edit.mood;
        edited.responses = edit.responses;
        edited.ratings = edit.ratings;
        edited.updated_at = now.with_timezone(&Utc).max(current.updated_at);

        self.entries.replace(edited)?;
        self.recompute(now);

        info!(entry_id = %id, "Entry updated");

        Ok(JournalEvent::EntryUpdated {
            entry_id: id.clone(),
            stats: self.stats.clone(),
        })
    }

    pub fn delete_entry<Tz: TimeZone>(
        &mut self,
        id: &EntryId,
        now: &DateTime<Tz>,
    ) -> Result<JournalEvent> {
        self.entries.remove(id)?;
        self.recompute(now);

        info!(entry_id = %id, "Entry deleted");

        Ok(JournalEvent::EntryDeleted {
            entry_id: id.clone(),
            stats: self.stats.clone(),
        })
    }

    /// Remove every entry
    pub fn clear<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> JournalEvent {
        let removed = self.entries.clear();
        self.recompute(now);

        info!(removed, "Journal cleared");

        JournalEvent::JournalCleared {
            removed,
            stats: self.stats.clone(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> JournalEvent {
        self.theme = theme;
        debug!(%theme, "Theme changed");
        JournalEvent::ThemeChanged { theme }
    }

    pub fn toggle_theme(&mut self) -> JournalEvent {
        self.set_theme(self.theme.toggled())
    }

    /// Recompute stats without changing anything, e.g. after midnight
    pub fn refresh_stats<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> JournalEvent {
        self.recompute(now);
        JournalEvent::StatsRefreshed {
            stats: self.stats.clone(),
        }
    }

    /// Export document of every entry
    pub fn export<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ExportDocument {
        export_document(&self.entries, &self.app_name, now.with_timezone(&Utc))
    }

    /// Persistable form of the journal state
    pub fn snapshot(&self) -> StateSnapshot {
        snapshot_of(&self.entries, &self.stats, self.theme)
    }

    fn recompute<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.stats = compute_stats(self.entries.as_slice(), now);
        debug!(
            current_streak = self.stats.current_streak,
            longest_streak = self.stats.longest_streak,
            total_entries = self.stats.total_entries,
            "Stats recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use mindlog_api::EntryRecord;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap()
    }

    fn daily(days_ago: i64) -> EntryDraft {
        let mut draft = EntryDraft::new(EntryKind::Daily, now() - Duration::days(days_ago));
        draft.mood = Score::new(7);
        draft
            .responses
            .insert("did".into(), format!("Day {}", days_ago));
        draft
    }

    fn created_id(event: &JournalEvent) -> EntryId {
        match event {
            JournalEvent::EntryCreated { entry_id, .. } => entry_id.clone(),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn create_sets_timestamps_and_stats() {
        let mut journal = Journal::default();
        let event = journal.create_entry(daily(0), &now()).unwrap();

        let id = created_id(&event);
        let entry = journal.entry(&id).unwrap();
        assert_eq!(entry.created_at, now());
        assert_eq!(entry.updated_at, now());
        assert_eq!(event.stats().unwrap().current_streak, 1);
        assert_eq!(journal.stats().total_entries, 1);
    }

    #[test]
    fn create_generates_unique_ids() {
        let mut journal = Journal::default();
        let a = created_id(&journal.create_entry(daily(0), &now()).unwrap());
        let b = created_id(&journal.create_entry(daily(0), &now()).unwrap());
        assert_ne!(a, b);
        assert_eq!(journal.entries().len(), 2);
    }

    #[test]
    fn update_keeps_kind_and_created_at() {
        let mut journal = Journal::default();
        let id = created_id(&journal.create_entry(daily(2), &now()).unwrap());

        let later = now() + Duration::hours(1);
        let mut edit = EntryEdit::from(journal.entry(&id).unwrap());
        edit.mood = Score::new(3);
        edit.date = Some(now());
        journal.update_entry(&id, edit, &later).unwrap();

        let entry = journal.entry(&id).unwrap();
        assert_eq!(entry.kind, EntryKind::Daily);
        assert_eq!(entry.created_at, now());
        assert_eq!(entry.updated_at, later);
        assert_eq!(entry.mood, Score::new(3));
        // re-targeted from two days ago to today
        assert_eq!(journal.stats().current_streak, 1);
    }

    #[test]
    fn update_never_moves_updated_at_backwards() {
        let mut journal = Journal::default();
        let id = created_id(&journal.create_entry(daily(0), &now()).unwrap());

        let earlier = now() - Duration::hours(3);
        journal.update_entry(&id, EntryEdit::default(), &earlier).unwrap();
        assert_eq!(journal.entry(&id).unwrap().updated_at, now());
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut journal = Journal::default();
        let missing = EntryId::new("missing");

        assert!(matches!(
            journal.update_entry(&missing, EntryEdit::default(), &now()),
            Err(MindlogError::EntryNotFound(_))
        ));
        assert!(matches!(
            journal.delete_entry(&missing, &now()),
            Err(MindlogError::EntryNotFound(_))
        ));
    }

    #[test]
    fn delete_and_clear_recompute_stats() {
        let mut journal = Journal::default();
        let today = created_id(&journal.create_entry(daily(0), &now()).unwrap());
        journal.create_entry(daily(1), &now()).unwrap();
        journal.create_entry(daily(2), &now()).unwrap();
        assert_eq!(journal.stats().current_streak, 3);

        let event = journal.delete_entry(&today, &now()).unwrap();
        // yesterday still anchors the streak
        assert_eq!(event.stats().unwrap().current_streak, 2);

        let event = journal.clear(&now());
        assert_eq!(
            event,
            JournalEvent::JournalCleared {
                removed: 2,
                stats: UserStats::default()
            }
        );
    }

    #[test]
    fn refresh_after_day_rollover() {
        let mut journal = Journal::default();
        journal.create_entry(daily(0), &now()).unwrap();
        assert_eq!(journal.stats().current_streak, 1);

        let two_days_later = now() + Duration::days(2);
        journal.refresh_stats(&two_days_later);
        assert_eq!(journal.stats().current_streak, 0);
        assert_eq!(journal.stats().longest_streak, 1);
    }

    #[test]
    fn theme_changes() {
        let mut journal = Journal::default();
        assert_eq!(journal.theme(), Theme::Light);
        assert_eq!(journal.toggle_theme(), JournalEvent::ThemeChanged { theme: Theme::Dark });
        assert_eq!(journal.set_theme(Theme::Light).stats(), None);
    }

    #[test]
    fn export_uses_app_name() {
        let mut journal = Journal::default().with_app_name("Reflections");
        journal.create_entry(daily(0), &now()).unwrap();

        let doc = journal.export(&now());
        assert_eq!(doc.app, "Reflections");
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.exported_at, "2025-06-15T20:00:00.000Z");
    }

    #[test]
    fn unparseable_date_must_be_retargeted_to_edit() {
        let mut journal = Journal::default();
        journal.create_entry(daily(0), &now()).unwrap();

        let mut snapshot = journal.snapshot();
        snapshot.entries[0].date = "Invalid Date".into();
        let mut journal = Journal::restore(snapshot, &now());
        let id = journal.entries()[0].id.clone();
        assert_eq!(journal.stats().current_streak, 0);

        let later = now() + Duration::minutes(5);
        let edit = EntryEdit::from(journal.entry(&id).unwrap());
        assert!(matches!(
            journal.update_entry(&id, edit.clone(), &later),
            Err(MindlogError::ValidationError(_))
        ));
        assert!(journal.entry(&id).unwrap().date.is_malformed());

        let retargeted = EntryEdit {
            date: Some(now()),
            ..edit
        };
        journal.update_entry(&id, retargeted, &later).unwrap();
        assert_eq!(journal.stats().current_streak, 1);

        journal.delete_entry(&id, &later).unwrap();
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn restore_reads_web_app_stats() {
        let json = r#"{
            "entries": [{
                "id": "a1", "type": "DAILY", "date": "2025-06-14T18:00:00.000Z",
                "responses": { "did": "Walked" },
                "createdAt": "2025-06-14T18:00:00.000Z", "updatedAt": "2025-06-14T18:00:00.000Z"
            }],
            "stats": { "currentStreak": 1, "longestStreak": 1, "totalEntries": 1, "lastEntryDate": "Sat Jun 14 2025" },
            "theme": "light"
        }"#;
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();

        let journal = Journal::restore(snapshot, &now());
        assert_eq!(journal.stats().current_streak, 1);
        assert_eq!(journal.stats().last_entry_date, NaiveDate::from_ymd_opt(2025, 6, 14));
    }

    #[test]
    fn restore_recomputes_stale_stats() {
        let mut journal = Journal::default();
        journal.create_entry(daily(0), &now()).unwrap();
        journal.create_entry(daily(1), &now()).unwrap();
        journal.set_theme(Theme::Dark);

        let mut snapshot = journal.snapshot();
        snapshot.stats.current_streak = 99;
        // repeated id, dropped on restore
        snapshot.entries.push(EntryRecord {
            date: "Invalid Date".into(),
            ..snapshot.entries[0].clone()
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        let snapshot: StateSnapshot = serde_json::from_str(&json).unwrap();

        let restored = Journal::restore(snapshot, &now());
        assert_eq!(restored.entries().len(), 2);
        assert_eq!(restored.stats().current_streak, 2);
        assert_eq!(restored.theme(), Theme::Dark);
    }
}
