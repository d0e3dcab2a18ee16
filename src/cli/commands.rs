//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Mood-tagged personal journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new entry
    New {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Mood (e.g., Feliz, Triste, happy, tired)
        #[arg(short, long)]
        mood: String,

        /// Entry content; read from stdin when omitted
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Change the title, mood or content of an entry
    Edit {
        /// Entry id
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one entry
    Show {
        /// Entry id
        id: i64,
    },

    /// List entries
    List {
        /// Only entries whose title or text contains this (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: date (newest first) or mood
        #[arg(long)]
        sort: Option<String>,

        /// Show at most N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the most recently written entries
    Recent,

    /// Show mood statistics
    Stats {
        /// Time range: week, month, year, all
        #[arg(short, long, default_value = "all")]
        range: String,
    },

    /// Show the mood trend over time
    Timeline {
        /// Time range: week, month, year, all
        #[arg(short, long, default_value = "all")]
        range: String,
    },

    /// List the available moods
    Moods,

    /// Show or set your name
    Name {
        /// New name
        name: Option<String>,

        /// Forget the stored name
        #[arg(long, conflicts_with = "name")]
        clear: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
