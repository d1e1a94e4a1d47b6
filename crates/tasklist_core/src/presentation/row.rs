//! Task row state and display attributes.

use crate::model::task::{Category, DueStatus, Priority, Task, TaskId, TaskPatch};
use crate::service::intent::Intent;
use chrono::NaiveDate;
use std::time::Duration;

/// Delay between starting the removal animation and applying the delete.
pub const REMOVE_DELAY: Duration = Duration::from_millis(350);

/// Keys handled while editing a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

/// In-place editor for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    task_id: TaskId,
    original: String,
    completed: bool,
    draft: String,
    editing: bool,
    removing: bool,
}

impl RowEditor {
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id,
            original: task.text.clone(),
            completed: task.completed,
            draft: task.text.clone(),
            editing: false,
            removing: false,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_removing(&self) -> bool {
        self.removing
    }

    /// Enters edit mode. Completed tasks cannot be edited.
    pub fn begin_edit(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.editing = true;
        true
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Enter commits, Escape reverts.
    pub fn handle_key(&mut self, key: EditKey) -> Option<Intent> {
        match key {
            EditKey::Enter => self.commit(),
            EditKey::Escape => {
                self.cancel();
                None
            }
        }
    }

    /// Losing focus commits like Enter.
    pub fn blur(&mut self) -> Option<Intent> {
        self.commit()
    }

    /// Leaves edit mode, emitting an edit only for non-empty changed text.
    pub fn commit(&mut self) -> Option<Intent> {
        self.editing = false;
        let trimmed = self.draft.trim();
        if trimmed.is_empty() || trimmed == self.original {
            self.draft = self.original.clone();
            return None;
        }

        let text = trimmed.to_string();
        self.original = text.clone();
        self.draft = text.clone();
        Some(Intent::Edit(self.task_id, TaskPatch::text(text)))
    }

    /// Leaves edit mode and restores the original text.
    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
        self.editing = false;
    }

    /// Starts the removal animation; the returned delete is due after the delay.
    pub fn begin_remove(&mut self) -> (Intent, Duration) {
        self.removing = true;
        (Intent::Delete(self.task_id), REMOVE_DELAY)
    }
}

/// Display attributes of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSummary {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: Category,
    pub due: Option<DueStatus>,
    pub overdue: bool,
}

impl RowSummary {
    pub fn new(task: &Task, today: NaiveDate) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority,
            category: task.category,
            due: task.due_status(today),
            overdue: task.is_overdue(today),
        }
    }

    /// Due label such as `Due tomorrow`, when a due date is set.
    pub fn due_label(&self) -> Option<String> {
        self.due.map(|status| status.to_string())
    }
}
