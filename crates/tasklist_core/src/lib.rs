//! Core domain logic for tasklist.
//! This crate is the single source of truth for task invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{
    Category, DueStatus, NewTask, ParseValueError, Priority, Task, TaskId, TaskPatch,
    TaskValidationError,
};
pub use presentation::add_form::AddForm;
pub use presentation::row::{EditKey, RowEditor, RowSummary};
pub use presentation::summary::{EmptyState, StatsSummary};
pub use repo::task_repo::{
    RepoError, RepoResult, SlotTaskRepository, TaskRepository, TASKS_SLOT_KEY,
};
pub use service::board::TaskBoard;
pub use service::intent::{Intent, IntentOutcome};
pub use service::task_store::{SubscriptionId, TaskStore};
pub use storage::{SlotStore, SqliteSlotStore, StorageError};
pub use view::derive::{derive_view, TaskStats};
pub use view::query::{CategoryFilter, SortOrder, StatusFilter, ViewQuery};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
