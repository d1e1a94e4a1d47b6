//! Stats bar and empty-list state.

use crate::view::derive::TaskStats;
use crate::view::query::ViewQuery;
use serde::Serialize;

/// Counts shown above the list.
///
/// Serializes flat: `total`, `active`, `completed`, `progressPercent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(flatten)]
    pub stats: TaskStats,
    pub progress_percent: u8,
}

impl StatsSummary {
    pub fn new(stats: TaskStats) -> Self {
        Self {
            stats,
            progress_percent: stats.progress_percent(),
        }
    }

    /// The progress bar is hidden for an empty list.
    pub fn shows_progress(&self) -> bool {
        self.stats.total > 0
    }

    /// Label of the clear-completed action, when there is anything to clear.
    pub fn clear_completed_label(&self) -> Option<String> {
        (self.stats.completed > 0).then(|| format!("Clear {} completed", self.stats.completed))
    }
}

/// Message shown instead of an empty projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// View parameters hide every task.
    NoMatches,
    /// The list itself is empty.
    NoTasks,
}

impl EmptyState {
    /// Returns the state to show, or `None` when the projection has rows.
    pub fn for_view(visible: usize, query: &ViewQuery) -> Option<Self> {
        if visible > 0 {
            return None;
        }
        if query.is_filtered() {
            Some(Self::NoMatches)
        } else {
            Some(Self::NoTasks)
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NoMatches => "No tasks found",
            Self::NoTasks => "No tasks yet",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::NoMatches => "Try adjusting your filters or search query",
            Self::NoTasks => "Add your first task above to get started!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptyState, StatsSummary};
    use crate::view::derive::TaskStats;
    use crate::view::query::{StatusFilter, ViewQuery};

    #[test]
    fn empty_state_distinguishes_filtered_views() {
        let mut query = ViewQuery::default();
        assert_eq!(EmptyState::for_view(0, &query), Some(EmptyState::NoTasks));
        assert_eq!(EmptyState::for_view(2, &query), None);

        query.status = StatusFilter::Completed;
        let state = EmptyState::for_view(0, &query).unwrap();
        assert_eq!(state.title(), "No tasks found");
    }

    #[test]
    fn summary_labels_follow_counts() {
        let summary = StatsSummary::new(TaskStats {
            total: 4,
            active: 3,
            completed: 1,
        });
        assert!(summary.shows_progress());
        assert_eq!(summary.progress_percent, 25);
        assert_eq!(summary.clear_completed_label().as_deref(), Some("Clear 1 completed"));

        let empty = StatsSummary::new(TaskStats::default());
        assert!(!empty.shows_progress());
        assert_eq!(empty.clear_completed_label(), None);
    }

    #[test]
    fn summary_serializes_flat_with_progress() {
        let summary = StatsSummary::new(TaskStats {
            total: 3,
            active: 1,
            completed: 2,
        });
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 3,
                "active": 1,
                "completed": 2,
                "progressPercent": 67
            })
        );
    }
}
