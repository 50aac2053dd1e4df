//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todotags")]
#[command(about = "Implied tags and date semantics for todo.txt tasks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./todotags.toml if present)
    #[arg(short, long, global = true, env = "TODOTAGS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tags implied by the given tags
    Implied {
        /// Tag identifiers (e.g., +project @context)
        #[arg(required = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Show date facts of a single todo.txt line
    Dates {
        /// The todo.txt line (quote it)
        line: String,

        /// Evaluate as of this date (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Report implied tags and status for every task in a todo.txt file
    Report {
        /// Path to the todo.txt file
        file: PathBuf,

        /// Evaluate as of this date (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,

        /// Only show overdue tasks
        #[arg(long)]
        overdue: bool,

        /// Only show active tasks
        #[arg(long)]
        active: bool,
    },
}
