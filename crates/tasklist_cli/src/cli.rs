//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::{Category, CategoryFilter, Priority, SortOrder, StatusFilter};

/// Local task list: add, complete, filter, sort and search short tasks.
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// SQLite database holding the task list.
    /// Defaults to `<data dir>/tasklist/tasklist.sqlite3`.
    #[arg(long = "db", global = true, env = "TASKLIST_DB")]
    pub db_path: Option<PathBuf>,

    /// Directory for rolling log files.
    /// Defaults to `<data dir>/tasklist/logs`.
    #[arg(long = "log-dir", global = true, env = "TASKLIST_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", global = true, env = "TASKLIST_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task text
        text: String,

        /// low|medium|high
        #[arg(short, long, default_value_t = Priority::Medium)]
        priority: Priority,

        /// personal|work|shopping|health|other
        #[arg(short, long, default_value_t = Category::Personal)]
        category: Category,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// List tasks
    List {
        /// all|active|completed
        #[arg(short, long, default_value_t = StatusFilter::All)]
        filter: StatusFilter,

        /// newest|oldest|priority|dueDate
        #[arg(short, long, default_value_t = SortOrder::Newest)]
        sort: SortOrder,

        /// Case-insensitive text search
        #[arg(short = 'q', long, default_value = "")]
        search: String,

        /// all|personal|work|shopping|health|other
        #[arg(short, long, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle completion of a task
    Toggle {
        /// Task position (`#n`), full id or unique id prefix
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task position (`#n`), full id or unique id prefix
        id: String,
    },

    /// Change fields of a task
    Edit {
        /// Task position (`#n`), full id or unique id prefix
        id: String,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        priority: Option<Priority>,

        #[arg(short, long)]
        category: Option<Category>,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,

        /// Set completion explicitly
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Remove every completed task
    ClearCompleted,

    /// Move a task within the stored order (1-based positions, see `#n` in `list`)
    Move { from: usize, to: usize },

    /// Show total/active/completed counts
    Stats {
        #[arg(long)]
        json: bool,
    },
}
