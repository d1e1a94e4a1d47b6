//! Pure projection and aggregate counts.
//!
//! # Invariants
//! - Sorting is stable and applied after every filter.
//! - Tasks without a due date sort after all dated tasks under `DueDate`.

use crate::model::task::Task;
use crate::view::query::{SortOrder, ViewQuery};
use serde::Serialize;
use std::cmp::Ordering;

/// Aggregate counts over the unfiltered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    /// Share of completed tasks as a rounded percentage; `0` when empty.
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u8
    }
}

/// Computes the displayed projection of `tasks` for `query`.
pub fn derive_view<'a>(tasks: &'a [Task], query: &ViewQuery) -> Vec<&'a Task> {
    let needle = search_needle(&query.search);

    let mut visible = tasks
        .iter()
        .filter(|task| match &needle {
            Some(needle) => task.text.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|task| query.status.accepts(task.completed))
        .filter(|task| query.category.accepts(task.category))
        .collect::<Vec<_>>();

    visible.sort_by(|a, b| compare(a, b, query.sort));
    visible
}

/// Lowercased search text, or `None` when the query is blank.
///
/// The query is not trimmed before matching; only blankness is checked.
fn search_needle(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

fn compare(a: &Task, b: &Task, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::Newest => b.created_at.cmp(&a.created_at),
        SortOrder::Oldest => a.created_at.cmp(&b.created_at),
        SortOrder::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortOrder::DueDate => match (a.due_date, b.due_date) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
