use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hubnotes")]
#[command(about = "Personal notes with tags, search and JSON export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (defaults to the platform data dir)
    #[arg(long, global = true, env = "HUBNOTES_DATA")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, newest first
    #[command(alias = "ls")]
    List {
        /// Only show notes whose title, content or tags contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a note in full
    #[command(alias = "v")]
    View {
        /// List position (e.g. 1) or note id
        reference: String,
    },

    /// Create a note
    #[command(alias = "n")]
    New {
        /// Title (defaults to "Untitled Note")
        #[arg(short, long)]
        title: Option<String>,

        /// Body text
        #[arg(short, long, default_value = "")]
        content: String,

        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Change a note's title, content or tags
    #[command(alias = "e")]
    Edit {
        /// List position (e.g. 1) or note id
        reference: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New body text
        #[arg(short, long)]
        content: Option<String>,

        /// Tag to add (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Tag to remove (repeatable)
        #[arg(long = "untag")]
        untags: Vec<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// List position (e.g. 1) or note id
        reference: String,
    },

    /// Write all notes to notes-export-<date>.json
    Export {
        /// Target directory (defaults to the configured export dir, then the current dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Replace all notes with the contents of an export file
    Import {
        /// Path to a previously exported file
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
