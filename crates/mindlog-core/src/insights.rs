//! Derived views for the analytics screen

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mindlog_api::{EntryKind, UserStats};
use mindlog_store::Entry;
use mindlog_util::calendar_day;

use crate::compute_stats;

/// One mood reading on the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPoint {
    pub day: NaiveDate,
    pub mood: u8,
}

/// Entry count for one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindShare {
    pub kind: EntryKind,
    pub count: usize,

    /// Share of all entries, 0-100
    pub percentage: f64,
}

/// Everything the analytics screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub stats: UserStats,
    pub mood_trend: Vec<MoodPoint>,
    pub average_mood: Option<f64>,
    pub distribution: Vec<KindShare>,
}

impl Insights {
    pub fn compute<Tz: TimeZone>(entries: &[Entry], now: &DateTime<Tz>, trend_days: usize) -> Self {
        let mood_trend = mood_trend(entries, &now.timezone(), trend_days);
        let average_mood = average_mood(&mood_trend);

        Self {
            stats: compute_stats(entries, now),
            mood_trend,
            average_mood,
            distribution: entry_distribution(entries),
        }
    }
}

/// The last `window` moods from Daily entries, oldest first.
///
/// Entries without a mood or with an unparseable date are left out.
pub fn mood_trend<Tz: TimeZone>(entries: &[Entry], zone: &Tz, window: usize) -> Vec<MoodPoint> {
    let mut moods: Vec<(DateTime<Utc>, u8)> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Daily)
        .filter_map(|e| Some((e.date.instant()?, e.mood?.get())))
        .collect();

    moods.sort_by_key(|(instant, _)| *instant);

    let skip = moods.len().saturating_sub(window);
    moods
        .into_iter()
        .skip(skip)
        .map(|(instant, mood)| MoodPoint {
            day: calendar_day(&instant, zone),
            mood,
        })
        .collect()
}

pub fn average_mood(points: &[MoodPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let total: u32 = points.iter().map(|p| u32::from(p.mood)).sum();
    Some(f64::from(total) / points.len() as f64)
}

/// Average mood to one decimal place, `"0.0"` when there is none
pub fn format_average(average: Option<f64>) -> String {
    format!("{:.1}", average.unwrap_or(0.0))
}

/// Entry counts per kind, in kind order
pub fn entry_distribution(entries: &[Entry]) -> Vec<KindShare> {
    let total = entries.len();

    EntryKind::ALL
        .iter()
        .map(|kind| {
            let count = entries.iter().filter(|e| e.kind == *kind).count();
            let percentage = if total > 0 {
                count as f64 * 100.0 / total as f64
            } else {
                0.0
            };
            KindShare {
                kind: *kind,
                count,
                percentage,
            }
        })
        .collect()
}
