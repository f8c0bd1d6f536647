use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayplan", version, about = "Half-hour day planner for the terminal")]
pub struct Cli {
    /// Store schedules in this directory instead of the discovered one
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error, off); falls back to DAYPLAN_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DateArg {
    /// Day to work on in YYYY-MM-DD format (defaults to today)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a project-local schedule store in the current directory
    Init,
    /// Print the day's grid
    Show {
        #[command(flatten)]
        date: DateArg,
    },
    /// Assign a task to a time slot
    Set {
        /// Slot time, e.g. 09:00 or 13:30
        time: String,
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
        #[command(flatten)]
        date: DateArg,
    },
    /// Remove the task from a time slot
    Clear {
        /// Slot time, e.g. 09:00 or 13:30
        time: String,
        #[command(flatten)]
        date: DateArg,
    },
    /// Launch the interactive TUI
    Tui {
        #[command(flatten)]
        date: DateArg,
    },
}
