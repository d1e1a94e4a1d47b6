//! User intents accepted by the board.

use crate::model::task::{NewTask, TaskId, TaskPatch, TaskValidationError};
use crate::view::query::{CategoryFilter, SortOrder, StatusFilter};

/// A request to mutate the store or change a view parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(NewTask),
    Toggle(TaskId),
    Delete(TaskId),
    Edit(TaskId, TaskPatch),
    ClearCompleted,
    Reorder { from: usize, to: usize },
    SetFilter(StatusFilter),
    SetSort(SortOrder),
    SetSearch(String),
    SetCategoryFilter(CategoryFilter),
}

/// Result of applying an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A task was created with this id.
    Added(TaskId),
    /// `ClearCompleted` removed this many tasks.
    Cleared(usize),
    /// The intent changed state.
    Applied,
    /// The intent targeted an unknown id or index; nothing changed.
    Ignored,
    /// The intent carried invalid input; nothing changed.
    Rejected(TaskValidationError),
}
