//! Plain-text rendering of board state.

use chrono::NaiveDate;
use tasklist_core::{EmptyState, RowSummary, StatsSummary, Task};

/// One list row: stored position, checkbox, text and metadata badges.
pub fn task_line(position: usize, task: &Task, today: NaiveDate) -> String {
    let row = RowSummary::new(task, today);
    let check = if row.completed { "[x]" } else { "[ ]" };
    let mut line = format!(
        "#{position:<3} {check} {}  · {} · {}",
        row.text, row.priority, row.category
    );
    if let Some(label) = row.due_label() {
        line.push_str(" · ");
        line.push_str(&label);
        if row.overdue {
            line.push_str(" !");
        }
    }
    line.push_str(&format!("  ({})", row.id));
    line
}

pub fn empty_state(state: EmptyState) -> String {
    format!("{}\n{}", state.title(), state.hint())
}

pub fn stats(summary: &StatsSummary) -> String {
    let mut text = format!(
        "Total {}  Active {}  Done {}",
        summary.stats.total, summary.stats.active, summary.stats.completed
    );
    if summary.shows_progress() {
        text.push_str(&format!("  Progress {}%", summary.progress_percent));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{stats, task_line};
    use chrono::NaiveDate;
    use tasklist_core::{Priority, StatsSummary, Task, TaskStats};

    #[test]
    fn task_line_shows_badges_and_overdue_marker() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut task = Task::new("Pay rent", 1).unwrap();
        task.priority = Priority::High;
        task.due_date = NaiveDate::from_ymd_opt(2025, 3, 8);

        let line = task_line(1, &task, today);
        assert!(line.starts_with("#1   [ ] Pay rent"));
        assert!(line.contains("· high · personal · 2d overdue !"));
    }

    #[test]
    fn stats_hide_progress_for_empty_list() {
        assert_eq!(
            stats(&StatsSummary::new(TaskStats::default())),
            "Total 0  Active 0  Done 0"
        );
    }
}
