//! Plain-text rendering of journal views

use chrono::{DateTime, TimeZone};
use mindlog_api::EntryKind;
use mindlog_config::{JournalConfig, PromptSet};
use mindlog_core::{Insights, entry_preview, format_average};
use mindlog_store::Entry;
use mindlog_util::format_day;
use std::fmt::Write;

/// Longest preview printed on a history line
const PREVIEW_WIDTH: usize = 60;

pub fn insights(insights: &Insights) -> String {
    let mut out = String::new();
    let stats = &insights.stats;

    let _ = writeln!(out, "Current streak: {} days", stats.current_streak);
    let _ = writeln!(out, "Longest streak: {} days", stats.longest_streak);
    let _ = writeln!(out, "Total entries:  {}", stats.total_entries);
    let _ = writeln!(
        out,
        "Last entry:     {}",
        stats
            .last_entry_date
            .map(format_day)
            .unwrap_or_else(|| "-".to_string())
    );
    let _ = writeln!(out, "Average mood:   {}", format_average(insights.average_mood));

    let _ = writeln!(out);
    let _ = writeln!(out, "Mood trend:");
    if insights.mood_trend.is_empty() {
        let _ = writeln!(out, "  (no moods recorded)");
    }
    for point in &insights.mood_trend {
        let bar = "#".repeat(usize::from(point.mood));
        let _ = writeln!(out, "  {}  {:>2} {}", format_day(point.day), point.mood, bar);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Entries by type:");
    for share in &insights.distribution {
        let _ = writeln!(
            out,
            "  {:<8} {:>4}  {:>5.1}%",
            share.kind, share.count, share.percentage
        );
    }

    out
}

/// One line per entry: day, kind, mood and a preview of the first answer
pub fn history<Tz: TimeZone>(entries: &[&Entry], config: &JournalConfig, now: &DateTime<Tz>) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let zone = now.timezone();
    let mut out = String::new();
    for entry in entries {
        let day = entry
            .date
            .calendar_day(&zone)
            .map(format_day)
            .unwrap_or_else(|| "????-??-??".to_string());
        let mood = entry
            .mood
            .map(|m| format!("{:>2}/10", m.get()))
            .unwrap_or_else(|| "  -  ".to_string());
        let preview = truncate(entry_preview(entry, config.prompts_for(entry.kind)), PREVIEW_WIDTH);

        let _ = writeln!(out, "{}  {:<7}  {}  {}", day, entry.kind, mood, preview);
    }
    out
}

pub fn prompts(config: &JournalConfig, kinds: &[EntryKind]) -> String {
    let mut out = String::new();
    for kind in kinds {
        let _ = writeln!(out, "{}:", kind);
        write_prompt_set(&mut out, config.prompts_for(*kind));
        let _ = writeln!(out);
    }
    out
}

fn write_prompt_set(out: &mut String, prompts: &PromptSet) {
    if prompts.questions.is_empty() {
        let _ = writeln!(out, "  (no questions)");
    }
    for question in &prompts.questions {
        let _ = writeln!(out, "  [{}] {}", question.id, question.label);
    }
    if !prompts.ratings.is_empty() {
        let _ = writeln!(out, "  Ratings: {}", prompts.ratings.join(", "));
    }
}

fn truncate(text: &str, width: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let cut: String = single_line.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", cut)
}
