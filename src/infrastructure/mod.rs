//! Infrastructure layer - Storage, persistence and configuration

pub mod config;
pub mod entry_store;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use entry_store::{Clock, EntryStore, SystemClock};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileSystemStorage, KeyValueStore, MemoryStorage};
