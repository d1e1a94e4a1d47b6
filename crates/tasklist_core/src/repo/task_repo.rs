//! Task list repository over a single storage slot.
//!
//! # Responsibility
//! - Serialize the full task list as a JSON array under a fixed key.
//! - Decode and validate the persisted list on load.
//!
//! # Invariants
//! - Loaded tasks satisfy `Task::validate()` and carry unique ids.
//! - Loaded `createdAt` values leave room for a newer task.
//! - An absent or blank slot loads as an empty list.

use crate::model::task::{Task, TaskId};
use crate::storage::{SlotStore, StorageError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the serialized task list.
pub const TASKS_SLOT_KEY: &str = "tasklist-tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task list persistence.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Serialization(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "task list (de)serialization failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Persistence contract for the canonical task list.
pub trait TaskRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// Repository storing the whole list as one JSON blob in a slot.
pub struct SlotTaskRepository<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> SlotTaskRepository<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }
}

impl<S: SlotStore> TaskRepository for SlotTaskRepository<S> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let Some(raw) = self.slots.read_slot(TASKS_SLOT_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&raw)?;
        ensure_unique_ids(&tasks)?;
        ensure_created_at_headroom(&tasks)?;
        Ok(tasks)
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let raw = serde_json::to_string(tasks)?;
        self.slots.write_slot(TASKS_SLOT_KEY, &raw)?;
        Ok(())
    }
}

fn ensure_unique_ids(tasks: &[Task]) -> RepoResult<()> {
    let mut seen = HashSet::<TaskId>::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate task id `{}`",
                task.id
            )));
        }
    }
    Ok(())
}

fn ensure_created_at_headroom(tasks: &[Task]) -> RepoResult<()> {
    match tasks.iter().find(|task| task.created_at == i64::MAX) {
        Some(task) => Err(RepoError::InvalidData(format!(
            "task `{}` has createdAt at the i64 limit",
            task.id
        ))),
        None => Ok(()),
    }
}
