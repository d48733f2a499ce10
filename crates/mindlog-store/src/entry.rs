//! Journal entry model

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mindlog_api::{EntryKind, EntryRecord};
use mindlog_util::{EntryId, calendar_day, format_timestamp, parse_timestamp};
use std::collections::BTreeMap;
use std::fmt;

use crate::{StoreError, StoreResult};

/// A 1-10 self-assessment value, used for mood and ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    fn from_wire(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The moment an entry reflects on.
///
/// Entries written through the store always hold a parsed instant. A
/// persisted snapshot may still contain a date that no longer parses; such
/// values are carried verbatim so they survive a save and never fall into
/// a streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDate {
    At(DateTime<Utc>),
    Malformed(String),
}

impl EntryDate {
    pub fn parse(value: &str) -> Self {
        match parse_timestamp(value) {
            Some(instant) => EntryDate::At(instant),
            None => EntryDate::Malformed(value.to_string()),
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            EntryDate::At(instant) => Some(*instant),
            EntryDate::Malformed(_) => None,
        }
    }

    /// Calendar day in `zone`, or `None` when the date is malformed
    pub fn calendar_day<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDate> {
        self.instant().map(|instant| calendar_day(&instant, zone))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, EntryDate::Malformed(_))
    }

    /// Stored string form
    pub fn to_record_string(&self) -> String {
        match self {
            EntryDate::At(instant) => format_timestamp(instant),
            EntryDate::Malformed(raw) => raw.clone(),
        }
    }
}

impl From<DateTime<Utc>> for EntryDate {
    fn from(instant: DateTime<Utc>) -> Self {
        EntryDate::At(instant)
    }
}

/// One reflection record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub date: EntryDate,
    pub mood: Option<Score>,

    /// Question id -> answer
    pub responses: BTreeMap<String, String>,

    /// Rating label -> score
    pub ratings: Option<BTreeMap<String, Score>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// New entry with a fresh id, created and updated at `now`
    pub fn new(kind: EntryKind, date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::generate(),
            kind,
            date: EntryDate::At(date),
            mood: None,
            responses: BTreeMap::new(),
            ratings: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_mood(mut self, mood: Score) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_response(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.responses.insert(question.into(), answer.into());
        self
    }

    pub fn with_rating(mut self, label: impl Into<String>, score: Score) -> Self {
        self.ratings
            .get_or_insert_with(BTreeMap::new)
            .insert(label.into(), score);
        self
    }

    /// Check the invariants every stored entry must hold
    pub fn validate(&self) -> StoreResult<()> {
        if self.id.is_empty() {
            return Err(StoreError::invalid(self.id.as_str(), "id cannot be empty"));
        }
        if let EntryDate::Malformed(raw) = &self.date {
            return Err(StoreError::invalid(
                self.id.as_str(),
                format!("unparseable date '{}'", raw),
            ));
        }
        if self.updated_at < self.created_at {
            return Err(StoreError::invalid(
                self.id.as_str(),
                "updatedAt is earlier than createdAt",
            ));
        }
        Ok(())
    }

    /// Convert a record, tolerating a malformed target date
    pub fn from_record_lenient(record: EntryRecord) -> StoreResult<Self> {
        convert_record(record)
    }

    /// Stored form of this entry
    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            id: self.id.to_string(),
            kind: self.kind,
            date: self.date.to_record_string(),
            mood: self.mood.map(|m| i64::from(m.get())),
            responses: self.responses.clone(),
            ratings: self.ratings.as_ref().map(|ratings| {
                ratings
                    .iter()
                    .map(|(label, score)| (label.clone(), i64::from(score.get())))
                    .collect()
            }),
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
        }
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = StoreError;

    /// Strict conversion: every invariant must hold
    fn try_from(record: EntryRecord) -> StoreResult<Self> {
        let entry = convert_record(record)?;
        entry.validate()?;
        Ok(entry)
    }
}

fn convert_record(record: EntryRecord) -> StoreResult<Entry> {
    let id = record.id;
    if id.trim().is_empty() {
        return Err(StoreError::invalid(id, "id cannot be empty"));
    }

    let mood = match record.mood {
        Some(value) => Some(
            Score::from_wire(value)
                .ok_or_else(|| StoreError::invalid(&id, format!("mood {} is outside 1-10", value)))?,
        ),
        None => None,
    };

    let ratings = match record.ratings {
        Some(ratings) => {
            let mut scores = BTreeMap::new();
            for (label, value) in ratings {
                let score = Score::from_wire(value).ok_or_else(|| {
                    StoreError::invalid(&id, format!("rating '{}' = {} is outside 1-10", label, value))
                })?;
                scores.insert(label, score);
            }
            Some(scores)
        }
        None => None,
    };

    let created_at = parse_timestamp(&record.created_at).ok_or_else(|| {
        StoreError::invalid(&id, format!("unparseable createdAt '{}'", record.created_at))
    })?;
    let updated_at = parse_timestamp(&record.updated_at).ok_or_else(|| {
        StoreError::invalid(&id, format!("unparseable updatedAt '{}'", record.updated_at))
    })?;
    if updated_at < created_at {
        return Err(StoreError::invalid(&id, "updatedAt is earlier than createdAt"));
    }

    Ok(Entry {
        id: EntryId::new(id),
        kind: record.kind,
        date: EntryDate::parse(&record.date),
        mood,
        responses: record.responses,
        ratings,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn record() -> EntryRecord {
        EntryRecord {
            id: "e1".into(),
            kind: EntryKind::Weekly,
            date: "2025-06-01T18:00:00.000Z".into(),
            mood: None,
            responses: BTreeMap::from([("win".to_string(), "Ran 10k".to_string())]),
            ratings: Some(BTreeMap::from([("Effort".to_string(), 8)])),
            created_at: "2025-06-01T18:10:00.000Z".into(),
            updated_at: "2025-06-01T18:10:00.000Z".into(),
        }
    }

    #[test]
    fn score_bounds() {
        assert!(Score::new(0).is_none());
        assert_eq!(Score::new(1).map(Score::get), Some(1));
        assert_eq!(Score::new(10).map(Score::get), Some(10));
        assert!(Score::new(11).is_none());
        assert!(Score::from_wire(-3).is_none());
        assert!(Score::from_wire(300).is_none());
    }

    #[test]
    fn strict_conversion_keeps_fields() {
        let entry = Entry::try_from(record()).unwrap();
        assert_eq!(entry.id.as_str(), "e1");
        assert_eq!(entry.kind, EntryKind::Weekly);
        assert_eq!(entry.responses["win"], "Ran 10k");
        assert_eq!(entry.ratings.as_ref().unwrap()["Effort"].get(), 8);
        assert_eq!(entry.to_record(), record());
    }

    #[test]
    fn strict_conversion_rejects_out_of_range_scores() {
        let mut bad_mood = record();
        bad_mood.mood = Some(11);
        assert!(matches!(Entry::try_from(bad_mood), Err(StoreError::InvalidEntry { .. })));

        let mut bad_rating = record();
        bad_rating.ratings = Some(BTreeMap::from([("Effort".to_string(), 0)]));
        assert!(matches!(Entry::try_from(bad_rating), Err(StoreError::InvalidEntry { .. })));
    }

    #[test]
    fn strict_conversion_rejects_bad_dates() {
        let mut bad_date = record();
        bad_date.date = "yesterday-ish".into();
        assert!(Entry::try_from(bad_date).is_err());

        let mut backwards = record();
        backwards.updated_at = "2025-06-01T18:00:00.000Z".into();
        assert!(Entry::try_from(backwards).is_err());

        let mut blank_id = record();
        blank_id.id = " ".into();
        assert!(Entry::try_from(blank_id).is_err());
    }

    #[test]
    fn lenient_conversion_keeps_malformed_date_verbatim() {
        let mut rec = record();
        rec.date = "Invalid Date".into();

        let entry = Entry::from_record_lenient(rec).unwrap();
        assert!(entry.date.is_malformed());
        assert!(entry.validate().is_err());
        assert_eq!(entry.to_record().date, "Invalid Date");
    }

    #[test]
    fn calendar_day_follows_zone() {
        let date = EntryDate::parse("2025-06-01T22:30:00Z");
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(date.calendar_day(&Utc), NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(date.calendar_day(&tokyo), NaiveDate::from_ymd_opt(2025, 6, 2));
        assert_eq!(EntryDate::parse("garbage").calendar_day(&Utc), None);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let now = Utc::now();
        let entry = Entry::new(EntryKind::Daily, now, now)
            .with_mood(Score::new(6).unwrap())
            .with_response("did", "Wrote code")
            .with_rating("Focus", Score::new(9).unwrap());

        assert_eq!(entry.mood.map(Score::get), Some(6));
        assert_eq!(entry.responses.len(), 1);
        assert_eq!(entry.ratings.unwrap()["Focus"].get(), 9);
        assert_eq!(entry.created_at, entry.updated_at);
    }
}
