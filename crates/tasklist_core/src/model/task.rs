//! Task domain model.
//!
//! # Responsibility
//! - Define the task record persisted in the storage slot.
//! - Provide creation, partial-update and completion helpers.
//! - Derive due-date status relative to a calendar day.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation; `TaskPatch` cannot
//!   express them.
//! - `text` is stored trimmed and is never empty.
//! - Deserialization applies the same validation as construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a task.
///
/// UUIDv7: a millisecond timestamp followed by random bits, so ids created
/// in quick succession stay unique without a shared counter.
pub type TaskId = Uuid;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Position in priority sort order; `High` sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseValueError::new("priority", value, "low|medium|high")),
        }
    }
}

/// Life area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Health,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "work" => Ok(Self::Work),
            "shopping" => Ok(Self::Shopping),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(ParseValueError::new(
                "category",
                value,
                "personal|work|shopping|health|other",
            )),
        }
    }
}

/// Error returned when a textual attribute value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    /// Attribute being parsed, e.g. `priority`.
    pub field: &'static str,
    /// Rejected raw input.
    pub value: String,
    /// Accepted values, `|`-separated.
    pub expected: &'static str,
}

impl ParseValueError {
    pub(crate) fn new(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

impl Display for ParseValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} `{}`; expected {}",
            self.field, self.value, self.expected
        )
    }
}

impl Error for ParseValueError {}

/// Validation failure for task construction, update or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty or whitespace-only.
    EmptyText,
    /// Id is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
            Self::NilId => write!(f, "task id cannot be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Serialized with camelCase field names; `dueDate` is omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: Category,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates an open task with a generated id and default attributes.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank.
    pub fn new(text: impl Into<String>, created_at: i64) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::now_v7(), text, created_at)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: normalize_text(text.into()),
            completed: false,
            priority: Priority::default(),
            category: Category::default(),
            created_at,
            due_date: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Returns a copy of this task with `patch` merged in.
    ///
    /// The receiver is left untouched so callers can replace the entry
    /// only when the merged record is valid.
    pub fn patched(&self, patch: &TaskPatch) -> Result<Self, TaskValidationError> {
        let mut next = self.clone();
        if let Some(text) = &patch.text {
            next.text = normalize_text(text.clone());
        }
        if let Some(completed) = patch.completed {
            next.completed = completed;
        }
        if let Some(priority) = patch.priority {
            next.priority = priority;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        if let Some(due_date) = patch.due_date {
            next.due_date = due_date;
        }
        next.validate()?;
        Ok(next)
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Due-date status relative to `today`, or `None` without a due date.
    pub fn due_status(&self, today: NaiveDate) -> Option<DueStatus> {
        self.due_date.map(|due| DueStatus::between(today, due))
    }

    /// Open task whose due date lies before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && matches!(self.due_status(today), Some(DueStatus::Overdue(_)))
    }
}

/// Input for creating a task through the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub priority: Priority,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Starts from `medium` priority, `personal` category and no due date.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: Priority::default(),
            category: Category::default(),
            due_date: None,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Partial update of the mutable task fields.
///
/// `due_date` is tri-state: `None` keeps the current value, `Some(None)`
/// clears it and `Some(Some(date))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Patch replacing only the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
    }
}

/// Position of a due date relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due this many days ago.
    Overdue(i64),
    Today,
    Tomorrow,
    /// Due in this many days (at least two).
    Upcoming(i64),
}

impl DueStatus {
    pub fn between(today: NaiveDate, due: NaiveDate) -> Self {
        match (due - today).num_days() {
            diff if diff < 0 => Self::Overdue(-diff),
            0 => Self::Today,
            1 => Self::Tomorrow,
            diff => Self::Upcoming(diff),
        }
    }
}

impl Display for DueStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue(days) => write!(f, "{days}d overdue"),
            Self::Today => write!(f, "Due today"),
            Self::Tomorrow => write!(f, "Due tomorrow"),
            Self::Upcoming(days) => write!(f, "Due in {days}d"),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    category: Category,
    created_at: i64,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
            priority: record.priority,
            category: record.category,
            created_at: record.created_at,
            due_date: record.due_date,
        };
        task.validate()?;
        Ok(task)
    }
}

fn normalize_text(text: String) -> String {
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        text
    } else {
        trimmed.to_string()
    }
}
