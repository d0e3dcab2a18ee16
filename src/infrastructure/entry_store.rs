//! Persisted entry collection

use crate::domain::content::{plain_text, sanitize};
use crate::domain::entry::persisted_precision;
use crate::domain::{EntryPatch, JournalEntry, Mood};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Storage key holding the JSON array of entries
pub const ENTRIES_KEY: &str = "journalEntries";

/// Storage key holding the user's display name
pub const USER_NAME_KEY: &str = "userName";

/// Source of the current time for ids and timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Owns the journal's entries and every write to them.
///
/// The whole collection lives under one storage key and is rewritten on each
/// mutation. The store keeps the last collection it successfully read or wrote
/// as its snapshot; a failed write leaves the snapshot untouched.
pub struct EntryStore<S: KeyValueStore, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    entries: Vec<JournalEntry>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Open the store and load the persisted entries
    pub fn open(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> EntryStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        let mut store = EntryStore {
            storage,
            clock,
            entries: Vec::new(),
        };
        store.load_all();
        store
    }

    /// Re-read the persisted entries and return them in stored order.
    ///
    /// Never fails: missing or malformed data reads as an empty collection,
    /// and if storage cannot be read at all the last snapshot is returned.
    pub fn load_all(&mut self) -> Vec<JournalEntry> {
        match self.storage.get(ENTRIES_KEY) {
            Ok(Some(raw)) => self.entries = decode_entries(&raw),
            Ok(None) => self.entries = Vec::new(),
            Err(e) => warn!("keeping last snapshot, storage read failed: {}", e),
        }
        debug!(count = self.entries.len(), "loaded entries");
        self.entries.clone()
    }

    /// The entries as of the last load or successful write
    pub fn snapshot(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Create a new entry and put it at the front of the collection.
    #[instrument(skip(self, content))]
    pub fn create(&mut self, title: &str, mood: &str, content: &str) -> Result<JournalEntry> {
        validate_title(title)?;
        let mood = parse_mood(mood)?;
        let content = prepare_content(content)?;

        let now = persisted_precision(self.clock.now());
        let entry = JournalEntry {
            id: self.next_id(now)?,
            title: title.to_string(),
            date: now,
            mood,
            content,
            updated_at: None,
        };

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry.clone());
        entries.extend(self.entries.iter().cloned());
        self.persist(entries)?;

        info!(id = entry.id, mood = %entry.mood, "created entry");
        Ok(entry)
    }

    /// Apply `patch` to the entry with `id` and stamp `updated_at`.
    #[instrument(skip(self, patch))]
    pub fn update(&mut self, id: i64, patch: &EntryPatch) -> Result<JournalEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(MoodjourError::NotFound(id))?;

        let mut updated = self.entries[index].clone();
        if let Some(title) = &patch.title {
            validate_title(title)?;
            updated.title = title.clone();
        }
        if let Some(mood) = &patch.mood {
            updated.mood = parse_mood(mood)?;
        }
        if let Some(content) = &patch.content {
            updated.content = prepare_content(content)?;
        }
        updated.updated_at = Some(persisted_precision(self.clock.now()));

        let mut entries = self.entries.clone();
        entries[index] = updated.clone();
        self.persist(entries)?;

        info!(id, "updated entry");
        Ok(updated)
    }

    /// Remove the entry with `id`. Deleting an unknown id is a no-op.
    ///
    /// Returns whether an entry was removed.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let entries: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        let removed = entries.len() != self.entries.len();
        self.persist(entries)?;

        if removed {
            info!(id, "deleted entry");
        } else {
            debug!(id, "delete of unknown entry ignored");
        }
        Ok(removed)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// The `limit` most recently created entries, newest first
    pub fn recent(&self, limit: usize) -> &[JournalEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// The stored user name, if one was set
    pub fn user_name(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(USER_NAME_KEY)?
            .filter(|name| !name.trim().is_empty()))
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MoodjourError::Validation(
                "Name must not be empty".to_string(),
            ));
        }
        self.storage.set(USER_NAME_KEY, name)
    }

    /// Forget the stored user name
    pub fn clear_user_name(&self) -> Result<()> {
        self.storage.remove(USER_NAME_KEY)
    }

    /// Millisecond timestamp, bumped past the largest id already in use.
    fn next_id(&self, now: DateTime<Utc>) -> Result<i64> {
        let candidate = now.timestamp_millis();
        match self.entries.iter().map(|entry| entry.id).max() {
            Some(max) if max >= candidate => max.checked_add(1).ok_or_else(|| {
                MoodjourError::Persistence(format!(
                    "No entry id left after {}; stored ids are out of range",
                    max
                ))
            }),
            _ => Ok(candidate),
        }
    }

    fn persist(&mut self, entries: Vec<JournalEntry>) -> Result<()> {
        let raw = serde_json::to_string(&entries)
            .map_err(|e| MoodjourError::Persistence(format!("Failed to encode entries: {}", e)))?;
        self.storage.set(ENTRIES_KEY, &raw)?;
        self.entries = entries;
        Ok(())
    }
}

fn decode_entries(raw: &str) -> Vec<JournalEntry> {
    let entries: Vec<JournalEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("treating malformed entry data as empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = entries.len();
    let unique: Vec<JournalEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id))
        .collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "dropped entries with duplicate ids");
    }
    unique
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(MoodjourError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn parse_mood(mood: &str) -> Result<Mood> {
    Mood::from_str(mood).map_err(MoodjourError::Validation)
}

fn prepare_content(content: &str) -> Result<String> {
    let sanitized = sanitize(content);
    if plain_text(&sanitized).trim().is_empty() {
        return Err(MoodjourError::Validation(
            "Content must not be empty".to_string(),
        ));
    }
    Ok(sanitized)
}
