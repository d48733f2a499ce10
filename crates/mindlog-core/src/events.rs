//! Events emitted by the journal session

use mindlog_api::{EntryKind, Theme, UserStats};
use mindlog_util::EntryId;

/// Events emitted by the journal after each change
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEvent {
    /// A new entry was saved
    EntryCreated {
        entry_id: EntryId,
        kind: EntryKind,
        stats: UserStats,
    },

    /// An existing entry was edited
    EntryUpdated {
        entry_id: EntryId,
        stats: UserStats,
    },

    /// An entry was deleted
    EntryDeleted {
        entry_id: EntryId,
        stats: UserStats,
    },

    /// Every entry was removed
    JournalCleared {
        removed: usize,
        stats: UserStats,
    },

    ThemeChanged {
        theme: Theme,
    },

    /// Stats were recomputed without any change to the entries
    StatsRefreshed {
        stats: UserStats,
    },
}

impl JournalEvent {
    /// Stats carried by the event, if it changed them
    pub fn stats(&self) -> Option<&UserStats> {
        match self {
            JournalEvent::EntryCreated { stats, .. }
            | JournalEvent::EntryUpdated { stats, .. }
            | JournalEvent::EntryDeleted { stats, .. }
            | JournalEvent::JournalCleared { stats, .. }
            | JournalEvent::StatsRefreshed { stats } => Some(stats),
            JournalEvent::ThemeChanged { .. } => None,
        }
    }
}
