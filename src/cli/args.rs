//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Hierarchical lists of named entries, one JSON file per top-level entry
#[derive(Parser, Debug)]
#[command(name = "outline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory (default: from config)
    #[arg(short = 'd', long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory
    Init,

    /// List root entries
    List,

    /// Print entry trees
    Show {
        /// Root entry to print (default: all)
        title: Option<String>,
        /// Draw with box characters instead of tabs
        #[arg(short, long)]
        pretty: bool,
    },

    /// Add an entry path: ROOT [CHILD...], creating missing entries
    Add {
        /// Titles from the root down to the new entry
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },

    /// Load every file, reporting the ones that fail
    Check,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Show config file path
    Path,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
