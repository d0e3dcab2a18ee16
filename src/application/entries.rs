//! Entry management use cases
//!
//! The service is the single owner of the `EntryStore`; presentation code
//! goes through it instead of touching storage.

use crate::domain::{query, EntryPatch, JournalEntry, SortKey};
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Clock, EntryStore, KeyValueStore, SystemClock};

/// Options for listing entries
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Case-insensitive text to look for in titles and content
    pub search: Option<String>,

    /// Display order
    pub sort: SortKey,

    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

/// What happened to a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(JournalEntry),
    /// The user declined the confirmation
    Cancelled,
    /// No entry had that id; nothing to do
    Missing,
}

/// Service for creating, editing, deleting and listing entries
pub struct EntryService<S: KeyValueStore, C: Clock = SystemClock> {
    store: EntryStore<S, C>,
}

impl<S: KeyValueStore, C: Clock> EntryService<S, C> {
    pub fn new(store: EntryStore<S, C>) -> Self {
        EntryService { store }
    }

    pub fn new_entry(&mut self, title: &str, mood: &str, content: &str) -> Result<JournalEntry> {
        self.store.create(title, mood, content)
    }

    pub fn edit_entry(&mut self, id: i64, patch: &EntryPatch) -> Result<JournalEntry> {
        self.store.update(id, patch)
    }

    /// Delete an entry once `confirm` agrees.
    ///
    /// `confirm` is only asked when the entry exists.
    pub fn delete_entry<F>(&mut self, id: i64, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&JournalEntry) -> bool,
    {
        let entry = match self.store.find_by_id(id) {
            Some(entry) => entry.clone(),
            None => return Ok(DeleteOutcome::Missing),
        };

        if !confirm(&entry) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.delete(id)?;
        Ok(DeleteOutcome::Deleted(entry))
    }

    pub fn show_entry(&self, id: i64) -> Result<JournalEntry> {
        self.store
            .find_by_id(id)
            .cloned()
            .ok_or(MoodjourError::NotFound(id))
    }

    /// Search, then sort, then truncate
    pub fn list_entries(&mut self, options: &ListOptions) -> Vec<JournalEntry> {
        let entries = self.store.load_all();
        let matching = match &options.search {
            Some(term) => query::search(&entries, term),
            None => entries,
        };

        let mut sorted = query::sort(&matching, options.sort);
        if let Some(limit) = options.limit {
            sorted.truncate(limit);
        }
        sorted
    }

    pub fn recent_entries(&self, limit: usize) -> Vec<JournalEntry> {
        self.store.recent(limit).to_vec()
    }

    pub fn all_entries(&mut self) -> Vec<JournalEntry> {
        self.store.load_all()
    }

    pub fn user_name(&self) -> Result<Option<String>> {
        self.store.user_name()
    }

    pub fn set_user_name(&self, name: &str) -> Result<()> {
        self.store.set_user_name(name)
    }

    pub fn clear_user_name(&self) -> Result<()> {
        self.store.clear_user_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use crate::infrastructure::MemoryStorage;

    fn service() -> EntryService<MemoryStorage> {
        EntryService::new(EntryStore::open(MemoryStorage::new()))
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut service = service();
        let entry = service.new_entry("Keep me", "Feliz", "text").unwrap();

        let outcome = service.delete_entry(entry.id, |_| false).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(service.show_entry(entry.id).is_ok());

        let outcome = service.delete_entry(entry.id, |e| e.title == "Keep me").unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted(entry.clone()));
        assert!(matches!(
            service.show_entry(entry.id),
            Err(MoodjourError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_missing_does_not_ask() {
        let mut service = service();
        let outcome = service
            .delete_entry(7, |_| panic!("should not be asked"))
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Missing);
    }

    #[test]
    fn test_list_search_sort_limit() {
        let mut service = service();
        service.new_entry("Walk", "Relaxado", "park walk").unwrap();
        service.new_entry("Work", "Ansioso", "walk to the office").unwrap();
        service.new_entry("Nap", "Cansado", "sleep").unwrap();

        let options = ListOptions {
            search: Some("WALK".to_string()),
            sort: SortKey::Mood,
            limit: None,
        };
        let moods: Vec<Mood> = service
            .list_entries(&options)
            .iter()
            .map(|e| e.mood)
            .collect();
        assert_eq!(moods, vec![Mood::Ansioso, Mood::Relaxado]);

        let options = ListOptions {
            limit: Some(2),
            ..Default::default()
        };
        assert_eq!(service.list_entries(&options).len(), 2);
    }

    #[test]
    fn test_show_missing_is_not_found() {
        let service = service();
        assert!(matches!(
            service.show_entry(1),
            Err(MoodjourError::NotFound(1))
        ));
    }
}
