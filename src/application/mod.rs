//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod manage_config;
pub mod statistics;

pub use entries::{DeleteOutcome, EntryService, ListOptions};
pub use manage_config::ConfigService;
pub use statistics::{build_report, build_timeline, StatisticsReport};
