//! Timeline filtering and entry previews

use mindlog_api::EntryKind;
use mindlog_config::PromptSet;
use mindlog_store::Entry;
use std::cmp::Reverse;

/// Shown when an entry has no non-empty answer
pub const EMPTY_PREVIEW: &str = "No reflection provided.";

/// Timeline filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Restrict to one kind; `None` shows all
    pub kind: Option<EntryKind>,

    /// Case-insensitive text searched for in the answers
    pub search: String,
}

impl HistoryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(kind) = self.kind
            && entry.kind != kind
        {
            return false;
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let text = entry
            .responses
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        text.contains(&needle)
    }
}

/// Entries passing `filter`, newest target date first, unparseable dates last
pub fn filter_history<'a>(entries: &'a [Entry], filter: &HistoryFilter) -> Vec<&'a Entry> {
    let mut matched: Vec<&Entry> = entries.iter().filter(|e| filter.matches(e)).collect();
    matched.sort_by_key(|e| Reverse(e.date.instant()));
    matched
}

/// First non-empty answer, in question order, then any answer to a question
/// no longer configured
pub fn entry_preview<'a>(entry: &'a Entry, prompts: &PromptSet) -> &'a str {
    let configured = prompts
        .questions
        .iter()
        .filter_map(|q| entry.responses.get(&q.id));
    let unconfigured = entry
        .responses
        .iter()
        .filter(|(id, _)| prompts.question(id).is_none())
        .map(|(_, answer)| answer);

    configured
        .chain(unconfigured)
        .map(|answer| answer.trim())
        .find(|answer| !answer.is_empty())
        .unwrap_or(EMPTY_PREVIEW)
}
