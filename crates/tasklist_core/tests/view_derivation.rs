use chrono::NaiveDate;
use tasklist_core::{
    derive_view, Category, CategoryFilter, Priority, SortOrder, StatusFilter, Task, TaskStats,
    ViewQuery,
};

fn task(text: &str, created_at: i64) -> Task {
    Task::new(text, created_at).unwrap()
}

fn texts(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.text.clone()).collect()
}

fn sorted_by(sort: SortOrder) -> ViewQuery {
    ViewQuery {
        sort,
        ..ViewQuery::default()
    }
}

#[test]
fn priority_sort_orders_high_medium_low() {
    let mut low = task("low", 1);
    low.priority = Priority::Low;
    let mut high = task("high", 2);
    high.priority = Priority::High;
    let medium = task("medium", 3);
    let tasks = vec![low, high, medium];

    let visible = derive_view(&tasks, &sorted_by(SortOrder::Priority));
    assert_eq!(texts(&visible), ["high", "medium", "low"]);
}

#[test]
fn priority_sort_is_stable_for_ties() {
    let mut tasks = Vec::new();
    for (index, priority) in [Priority::Low, Priority::High, Priority::Low, Priority::High]
        .into_iter()
        .enumerate()
    {
        let mut entry = task(&format!("{priority}-{index}"), index as i64);
        entry.priority = priority;
        tasks.push(entry);
    }

    let visible = derive_view(&tasks, &sorted_by(SortOrder::Priority));
    assert_eq!(texts(&visible), ["high-1", "high-3", "low-0", "low-2"]);
}

#[test]
fn due_date_sort_puts_undated_last() {
    let undated_a = task("undated a", 1);
    let mut late = task("late", 2);
    late.due_date = NaiveDate::from_ymd_opt(2025, 5, 1);
    let undated_b = task("undated b", 3);
    let mut early = task("early", 4);
    early.due_date = NaiveDate::from_ymd_opt(2025, 1, 15);
    let tasks = vec![undated_a, late, undated_b, early];

    let visible = derive_view(&tasks, &sorted_by(SortOrder::DueDate));
    assert_eq!(texts(&visible), ["early", "late", "undated a", "undated b"]);
}

#[test]
fn newest_and_oldest_follow_created_at() {
    let tasks = vec![task("b", 20), task("c", 30), task("a", 10)];

    let newest = derive_view(&tasks, &sorted_by(SortOrder::Newest));
    assert_eq!(texts(&newest), ["c", "b", "a"]);

    let oldest = derive_view(&tasks, &sorted_by(SortOrder::Oldest));
    assert_eq!(texts(&oldest), ["a", "b", "c"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let tasks = vec![task("Buy milk", 1), task("Call mom", 2)];
    let query = ViewQuery {
        search: "MIL".to_string(),
        ..ViewQuery::default()
    };

    assert_eq!(texts(&derive_view(&tasks, &query)), ["Buy milk"]);
}

#[test]
fn blank_search_matches_everything() {
    let tasks = vec![task("Buy milk", 1), task("Call mom", 2)];
    let query = ViewQuery {
        search: "   ".to_string(),
        ..ViewQuery::default()
    };

    assert_eq!(derive_view(&tasks, &query).len(), 2);
}

#[test]
fn status_and_category_filters_combine() {
    let mut done_work = task("done work", 1);
    done_work.completed = true;
    done_work.category = Category::Work;
    let mut open_work = task("open work", 2);
    open_work.category = Category::Work;
    let open_personal = task("open personal", 3);
    let tasks = vec![done_work, open_work, open_personal];

    let active_work = ViewQuery {
        status: StatusFilter::Active,
        category: CategoryFilter::Only(Category::Work),
        ..ViewQuery::default()
    };
    assert_eq!(texts(&derive_view(&tasks, &active_work)), ["open work"]);

    let completed = ViewQuery {
        status: StatusFilter::Completed,
        ..ViewQuery::default()
    };
    assert_eq!(texts(&derive_view(&tasks, &completed)), ["done work"]);
}

#[test]
fn stats_ignore_view_parameters() {
    let mut done = task("done", 1);
    done.completed = true;
    let tasks = vec![done, task("open a", 2), task("open b", 3)];

    let query = ViewQuery {
        search: "zzz".to_string(),
        ..ViewQuery::default()
    };
    assert!(derive_view(&tasks, &query).is_empty());
    assert_eq!(
        TaskStats::from_tasks(&tasks),
        TaskStats {
            total: 3,
            active: 2,
            completed: 1,
        }
    );
}
