//! Statistics use case

use crate::domain::{query, stats, JournalEntry, Mood, MoodShare, TimeRange, TimelinePoint};
use chrono::{DateTime, Utc};

/// Everything the statistics view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsReport {
    pub range: TimeRange,
    pub total_entries: usize,
    pub most_frequent_mood: Option<Mood>,
    pub average_word_count: usize,
    pub mood_distribution: Vec<MoodShare>,
}

/// Summarize the entries dated within `range` of `now`.
pub fn build_report(
    entries: &[JournalEntry],
    range: TimeRange,
    now: DateTime<Utc>,
) -> StatisticsReport {
    let selected = query::within_range(entries, range, now);

    StatisticsReport {
        range,
        total_entries: selected.len(),
        most_frequent_mood: stats::most_frequent_mood(&selected),
        average_word_count: stats::average_word_count(&selected),
        mood_distribution: stats::mood_share(&selected),
    }
}

/// Mood trend for the entries dated within `range` of `now`.
pub fn build_timeline(
    entries: &[JournalEntry],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<TimelinePoint> {
    stats::timeline(&query::within_range(entries, range, now))
}
