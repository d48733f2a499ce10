//! Streak statistics
//!
//! Only Daily entries count toward streaks. Each one is reduced to the
//! calendar day its target date falls on, in the time zone of the reference
//! moment passed by the caller, and same-day entries collapse into one day.
//!
//! An entry whose date cannot be parsed becomes an unknown day. It sorts after
//! every real day, is never consecutive with anything and never anchors the
//! current streak, so one bad record costs accuracy but nothing else.
//!
//! Future-dated entries are taken as they are. A Daily entry dated tomorrow
//! becomes the most recent day, which then anchors neither today nor
//! yesterday and resets the current streak to zero.

use chrono::{DateTime, NaiveDate, TimeZone};
use mindlog_api::{EntryKind, UserStats};
use mindlog_store::Entry;
use mindlog_util::days_between;

/// Compute the journal statistics as of `now`.
///
/// Pure and total: the result depends only on `entries` and `now`, never on
/// input order, and an empty slice yields zeroed stats.
pub fn compute_stats<Tz: TimeZone>(entries: &[Entry], now: &DateTime<Tz>) -> UserStats {
    let days = streak_days(entries, &now.timezone());

    let Some(most_recent) = days.first().copied() else {
        return UserStats {
            total_entries: entries.len(),
            ..UserStats::default()
        };
    };

    UserStats {
        current_streak: current_streak(&days, now.date_naive()),
        longest_streak: longest_streak(&days),
        total_entries: entries.len(),
        last_entry_date: most_recent,
    }
}

/// Distinct days with a Daily entry, most recent first, unknown day last
fn streak_days<Tz: TimeZone>(entries: &[Entry], zone: &Tz) -> Vec<Option<NaiveDate>> {
    let mut days: Vec<Option<NaiveDate>> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Daily)
        .map(|e| e.date.calendar_day(zone))
        .collect();

    // None < Some(_), so a descending sort leaves the unknown day at the end
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

fn current_streak(days: &[Option<NaiveDate>], today: NaiveDate) -> u32 {
    let Some(Some(anchor)) = days.first().copied() else {
        return 0;
    };

    if anchor != today && Some(anchor) != today.pred_opt() {
        return 0;
    }

    let mut streak = 0;
    for (position, day) in days.iter().enumerate() {
        match day {
            Some(day) if days_between(anchor, *day) == position as i64 => streak += 1,
            _ => break,
        }
    }
    streak
}

fn longest_streak(days: &[Option<NaiveDate>]) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let mut longest = 0;
    let mut run = 0;
    for pair in days.windows(2) {
        if is_consecutive(pair[0], pair[1]) {
            run += 1;
        } else {
            longest = longest.max(run + 1);
            run = 0;
        }
    }
    longest.max(run + 1)
}

fn is_consecutive(newer: Option<NaiveDate>, older: Option<NaiveDate>) -> bool {
    matches!((newer, older), (Some(newer), Some(older)) if days_between(newer, older) == 1)
}
