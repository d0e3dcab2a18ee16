//! moodjour - Mood-tagged personal journal
//!
//! Keeps diary entries tagged with one of eight moods in a local key-value
//! store, and derives searchable, sortable views and mood statistics from them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
