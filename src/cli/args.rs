//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Render and query key/multi-value outlines as trees
#[derive(Parser, Debug)]
#[command(name = "nodetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Outline file (default: stdin)
    #[arg(short, long, global = true, env = "NODETREE_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the outline as a tree
    Show {
        /// Render only the subtree at this path
        #[arg(short, long)]
        at: Option<String>,

        /// Print keys only
        #[arg(long)]
        keys_only: bool,
    },

    /// Print the values stored at a path
    Find {
        /// Key path from the root, e.g. app/db
        path: String,
    },

    /// Search for a key anywhere below a node and print its path
    Search {
        /// Key to look for
        key: String,

        /// Start below this path instead of the root
        #[arg(short, long)]
        under: Option<String>,
    },

    /// List every node path in pre-order with its value count
    Paths,

    /// Print the effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
