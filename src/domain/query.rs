//! Derived views over a snapshot of entries
//!
//! Every function here is pure: it reads the slice it is given and returns a
//! new sequence, never touching storage.

use crate::domain::content::plain_text;
use crate::domain::JournalEntry;
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display order for entry lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first
    #[default]
    Date,
    /// Alphabetical by mood label
    Mood,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "mood" => Ok(SortKey::Mood),
            _ => Err(format!(
                "Invalid sort key: '{}'. Valid sort keys are: date, mood",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => f.write_str("date"),
            SortKey::Mood => f.write_str("mood"),
        }
    }
}

/// Window of time the statistics are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimeRange {
    /// Earliest date included in the range, or `None` for no lower bound
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeRange::Week => Some(now - Duration::days(7)),
            TimeRange::Month => now.checked_sub_months(Months::new(1)),
            TimeRange::Year => now.checked_sub_months(Months::new(12)),
            TimeRange::All => None,
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            "all" => Ok(TimeRange::All),
            _ => Err(format!(
                "Invalid range: '{}'. Valid ranges are: week, month, year, all",
                s
            )),
        }
    }
}

/// Entries whose title or plain-text content contains `term`, ignoring case.
/// Relative order is preserved; an empty term matches everything.
pub fn search(entries: &[JournalEntry], term: &str) -> Vec<JournalEntry> {
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || plain_text(&entry.content)
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase()
                    .contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the given key.
pub fn sort(entries: &[JournalEntry], key: SortKey) -> Vec<JournalEntry> {
    let mut sorted = entries.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Mood => sorted.sort_by(|a, b| a.mood.label().cmp(b.mood.label())),
    }
    sorted
}

/// Entries dated inside `range`, measured back from `now`.
pub fn within_range(
    entries: &[JournalEntry],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<JournalEntry> {
    match range.start(now) {
        Some(start) => entries
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= now)
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}
