//! Aggregate statistics over a snapshot of entries

use crate::domain::content::word_count;
use crate::domain::{JournalEntry, Mood};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One point of the mood trend: when, and the mood's enumeration rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub mood_rank: usize,
}

/// Count and rounded percentage of one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    pub percent: u32,
}

/// Occurrences of each mood present in `entries`. Absent moods are omitted.
pub fn mood_frequency(entries: &[JournalEntry]) -> BTreeMap<Mood, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    counts
}

/// The mood with the highest count.
///
/// Ties go to the mood that comes first in the enumeration. `None` when there
/// are no entries.
pub fn most_frequent_mood(entries: &[JournalEntry]) -> Option<Mood> {
    let counts = mood_frequency(entries);
    // max_by_key returns the last maximum, so walk the enumeration backwards.
    counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| **count)
        .map(|(mood, _)| *mood)
}

/// Mean word count of the entries' plain-text content, rounded to the nearest
/// integer. 0 for no entries.
pub fn average_word_count(entries: &[JournalEntry]) -> usize {
    if entries.is_empty() {
        return 0;
    }

    let total: usize = entries.iter().map(|entry| word_count(&entry.content)).sum();
    (total as f64 / entries.len() as f64).round() as usize
}

/// Entries in ascending date order (stable), reduced to their mood rank.
pub fn timeline(entries: &[JournalEntry]) -> Vec<TimelinePoint> {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    sorted
        .into_iter()
        .map(|entry| TimelinePoint {
            date: entry.date,
            mood: entry.mood,
            mood_rank: entry.mood.rank(),
        })
        .collect()
}

/// Count and share of the total for every mood present, in enumeration order.
pub fn mood_share(entries: &[JournalEntry]) -> Vec<MoodShare> {
    let total = entries.len();
    mood_frequency(entries)
        .into_iter()
        .map(|(mood, count)| MoodShare {
            mood,
            count,
            percent: (count as f64 * 100.0 / total as f64).round() as u32,
        })
        .collect()
}
