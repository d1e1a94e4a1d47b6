//! Canonical task list with write-through persistence.
//!
//! # Responsibility
//! - Apply add/toggle/delete/edit/clear/reorder mutations.
//! - Persist the full list after every effective mutation.
//! - Notify subscribers with the new list.
//!
//! # Invariants
//! - Task ids are unique across the live list.
//! - `created_at` strictly increases in insertion order.
//! - New tasks are prepended.
//! - Load and save failures are logged, never returned: the store always
//!   starts and keeps working from its in-memory list.

use crate::clock::Clock;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch, TaskValidationError};
use crate::repo::task_repo::TaskRepository;
use crate::view::derive::TaskStats;
use log::{debug, error, info, warn};
use uuid::Uuid;

/// Handle returned by [`TaskStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Task])>;

/// In-memory task list backed by a [`TaskRepository`].
pub struct TaskStore<R: TaskRepository, C: Clock> {
    repo: R,
    clock: C,
    tasks: Vec<Task>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<R: TaskRepository, C: Clock> TaskStore<R, C> {
    /// Loads the persisted list, falling back to an empty list when the
    /// slot is absent, unreadable or malformed.
    pub fn load(repo: R, clock: C) -> Self {
        let tasks = match repo.load_tasks() {
            Ok(tasks) => {
                info!(
                    "event=tasks_load module=service status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=service status=recovered fallback=empty error={}",
                    err
                );
                Vec::new()
            }
        };

        Self {
            repo,
            clock,
            tasks,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a task from `new` and prepends it.
    ///
    /// # Errors
    /// - `EmptyText` when the text is blank; the list is left untouched.
    pub fn add(&mut self, new: NewTask) -> Result<TaskId, TaskValidationError> {
        let mut task = Task::new(new.text, self.next_created_at())?;
        while self.position(task.id).is_some() {
            task.id = Uuid::now_v7();
        }
        task.priority = new.priority;
        task.category = new.category;
        task.due_date = new.due_date;

        let id = task.id;
        self.tasks.insert(0, task);
        info!("event=task_add module=service status=ok task_id={id}");
        self.commit("add");
        Ok(id)
    }

    /// Flips completion of `id`. Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_toggle module=service status=skipped reason=not_found task_id={id}");
            return false;
        };
        self.tasks[index].toggle();
        info!(
            "event=task_toggle module=service status=ok task_id={} completed={}",
            id, self.tasks[index].completed
        );
        self.commit("toggle");
        true
    }

    /// Removes `id`. Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=task_delete module=service status=skipped reason=not_found task_id={id}");
            return false;
        };
        self.tasks.remove(index);
        info!("event=task_delete module=service status=ok task_id={id}");
        self.commit("delete");
        true
    }

    /// Merges `patch` into `id`, replacing the entry.
    ///
    /// Returns `Ok(false)` when the id is unknown.
    ///
    /// # Errors
    /// - `EmptyText` when the patched text is blank; the task is unchanged.
    pub fn edit(&mut self, id: TaskId, patch: &TaskPatch) -> Result<bool, TaskValidationError> {
        let Some(index) = self.position(id) else {
            debug!("event=task_edit module=service status=skipped reason=not_found task_id={id}");
            return Ok(false);
        };
        self.tasks[index] = self.tasks[index].patched(patch)?;
        info!("event=task_edit module=service status=ok task_id={id}");
        self.commit("edit");
        Ok(true)
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            info!("event=tasks_clear_completed module=service status=ok removed={removed}");
            self.commit("clear_completed");
        }
        removed
    }

    /// Moves the task at `from` to position `to`, shifting the tasks between.
    ///
    /// `from` out of range is a no-op returning `false`; `to` is clamped to
    /// the last index.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tasks.len() {
            debug!(
                "event=tasks_reorder module=service status=skipped reason=out_of_range from={} len={}",
                from,
                self.tasks.len()
            );
            return false;
        }
        let to = to.min(self.tasks.len() - 1);
        if from != to {
            let moved = self.tasks.remove(from);
            self.tasks.insert(to, moved);
            info!("event=tasks_reorder module=service status=ok from={from} to={to}");
            self.commit("reorder");
        }
        true
    }

    /// Registers `listener`, called with the full list after each mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Task]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    /// Tasks in canonical (prepend) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Saturates at `i64::MAX` when a repository hands back a list already
    /// at the limit; `SlotTaskRepository` refuses such lists on load.
    fn next_created_at(&self) -> i64 {
        let now = self.clock.now_millis();
        match self.tasks.iter().map(|task| task.created_at).max() {
            Some(latest) if latest >= now => latest.saturating_add(1),
            _ => now,
        }
    }

    fn commit(&mut self, operation: &'static str) {
        if let Err(err) = self.repo.save_tasks(&self.tasks) {
            error!(
                "event=tasks_save module=service status=error operation={} count={} error={}",
                operation,
                self.tasks.len(),
                err
            );
        }
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.tasks);
        }
    }
}
