//! Domain layer - Entry model and pure derivations

pub mod content;
pub mod entry;
pub mod mood;
pub mod query;
pub mod stats;

pub use entry::{EntryPatch, JournalEntry};
pub use mood::Mood;
pub use query::{SortKey, TimeRange};
pub use stats::{MoodShare, TimelinePoint};
