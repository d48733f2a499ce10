//! Time utilities for mindlog
//!
//! Journal entries carry absolute instants (stored in UTC), but streaks are
//! measured in calendar days. Everything that turns an instant into a day goes
//! through [`calendar_day`], always with the time zone of the caller's
//! reference moment, so "today", "yesterday" and day gaps share one frame.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `MINDLOG_MOCK_TIME` environment variable can be set
//! to override the wall clock returned by [`now`]. Useful for checking streaks
//! across a day boundary without waiting for midnight.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-12-25 23:59:30`)
//!
//! Example:
//! ```bash
//! MINDLOG_MOCK_TIME="2025-12-25 23:59:30" mindlog stats export.json
//! ```

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use std::sync::OnceLock;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "MINDLOG_MOCK_TIME";

/// Format used by `MINDLOG_MOCK_TIME`
const MOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical calendar-day format (`lastEntryDate`, export file names)
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Cached mock time offset from the real time when the process started.
/// This allows mock time to advance naturally.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

#[allow(clippy::disallowed_methods)] // This is the internal implementation that wraps Local::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                match NaiveDateTime::parse_from_str(&mock_time_str, MOCK_TIME_FORMAT) {
                    Ok(naive_dt) => {
                        if let Some(mock_dt) = Local.from_local_datetime(&naive_dt).single() {
                            let offset = mock_dt.signed_duration_since(chrono::Local::now());
                            tracing::info!(
                                mock_time = %mock_time_str,
                                offset_secs = offset.num_seconds(),
                                "Mock time enabled"
                            );
                            return Some(offset);
                        }
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            "Failed to convert mock time to local timezone"
                        );
                    }
                    Err(_) => {
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            expected_format = MOCK_TIME_FORMAT,
                            "Invalid mock time format"
                        );
                    }
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
///
/// This is the only place the wall clock is read. Library code takes the
/// reference moment as a parameter instead.
#[allow(clippy::disallowed_methods)] // This is the wrapper that provides mock time support
pub fn now() -> DateTime<Local> {
    let real_now = chrono::Local::now();

    match get_mock_time_offset() {
        Some(offset) => real_now + offset,
        None => real_now,
    }
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 date-times (`2025-03-01T08:15:00.000Z`,
/// `2025-03-01T08:15:00+02:00`) and bare dates (`2025-03-01`, read as
/// midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, DAY_FORMAT)
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

/// Format an instant the way entries are stored: RFC 3339, millisecond
/// precision, `Z` suffix.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The calendar day an instant falls on, as seen from `zone`.
pub fn calendar_day<Tz: TimeZone>(instant: &DateTime<Utc>, zone: &Tz) -> NaiveDate {
    instant.with_timezone(zone).date_naive()
}

/// Whole calendar days from `earlier` to `later` (negative if reversed).
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}
