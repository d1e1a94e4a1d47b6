//! Command execution against a task board.

use crate::cli::Commands;
use crate::error::CliError;
use crate::render;
use tasklist_core::{
    Clock, EmptyState, Intent, IntentOutcome, NewTask, StatsSummary, Task, TaskBoard, TaskId,
    TaskPatch, TaskRepository, ViewQuery,
};

/// Runs one command, printing its result to stdout.
pub fn run<R: TaskRepository, C: Clock>(
    board: &mut TaskBoard<R, C>,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::Add {
            text,
            priority,
            category,
            due,
        } => {
            let new = NewTask::new(text)
                .priority(priority)
                .category(category)
                .due_date(due);
            match board.dispatch(Intent::Add(new)) {
                IntentOutcome::Added(id) => println!("Added {id}"),
                IntentOutcome::Rejected(err) => return Err(err.into()),
                _ => {}
            }
        }
        Commands::List {
            filter,
            sort,
            search,
            category,
            json,
        } => {
            board.set_query(ViewQuery {
                search,
                status: filter,
                category,
                sort,
            });
            list(board, json)?;
        }
        Commands::Toggle { id } => {
            let id = resolve_task_ref(board.all_tasks(), &id)?;
            board.dispatch(Intent::Toggle(id));
            if let Some(task) = board.get(id) {
                let state = if task.completed { "Completed" } else { "Reopened" };
                println!("{state} {id}");
            }
        }
        Commands::Delete { id } => {
            let id = resolve_task_ref(board.all_tasks(), &id)?;
            board.dispatch(Intent::Delete(id));
            println!("Deleted {id}");
        }
        Commands::Edit {
            id,
            text,
            priority,
            category,
            due,
            clear_due,
            completed,
        } => {
            let id = resolve_task_ref(board.all_tasks(), &id)?;
            let patch = TaskPatch {
                text,
                completed,
                priority,
                category,
                due_date: if clear_due { Some(None) } else { due.map(Some) },
            };
            if patch.is_empty() {
                println!("Nothing to change");
                return Ok(());
            }
            if let IntentOutcome::Rejected(err) = board.dispatch(Intent::Edit(id, patch)) {
                return Err(err.into());
            }
            println!("Updated {id}");
        }
        Commands::ClearCompleted => {
            if let IntentOutcome::Cleared(removed) = board.dispatch(Intent::ClearCompleted) {
                println!("Cleared {removed} completed");
            }
        }
        Commands::Move { from, to } => {
            let Some(from_index) = from.checked_sub(1) else {
                return Err(CliError::UnknownTask(format!("#{from}")));
            };
            let outcome = board.dispatch(Intent::Reorder {
                from: from_index,
                to: to.saturating_sub(1),
            });
            if outcome == IntentOutcome::Ignored {
                return Err(CliError::UnknownTask(format!("#{from}")));
            }
            println!("Moved #{from} to #{to}");
        }
        Commands::Stats { json } => {
            let summary = StatsSummary::new(board.stats());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render::stats(&summary));
            }
        }
    }
    Ok(())
}

fn list<R: TaskRepository, C: Clock>(board: &TaskBoard<R, C>, json: bool) -> Result<(), CliError> {
    let visible = board.visible();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    let summary = StatsSummary::new(board.stats());
    println!("{}", render::stats(&summary));
    if let Some(state) = EmptyState::for_view(visible.len(), board.query()) {
        println!("{}", render::empty_state(state));
        return Ok(());
    }

    let today = board.store().clock().today();
    for task in visible {
        let position = stored_position(board.all_tasks(), task.id);
        println!("{}", render::task_line(position, task, today));
    }
    if let Some(label) = summary.clear_completed_label() {
        println!("({label}: `tasklist clear-completed`)");
    }
    Ok(())
}

fn stored_position(tasks: &[Task], id: TaskId) -> usize {
    tasks
        .iter()
        .position(|task| task.id == id)
        .map_or(0, |index| index + 1)
}

/// Resolves a task reference against the stored order.
///
/// `#n` is always a 1-based position. A bare number without a leading zero
/// is tried as a position first; everything else, and bare numbers that miss,
/// match as a full id or unique id prefix.
pub fn resolve_task_ref(tasks: &[Task], reference: &str) -> Result<TaskId, CliError> {
    let trimmed = reference.trim();
    if let Some(digits) = trimmed.strip_prefix('#') {
        return position_ref(tasks, digits)
            .ok_or_else(|| CliError::UnknownTask(reference.to_string()));
    }
    if !trimmed.starts_with('0') {
        if let Some(id) = position_ref(tasks, trimmed) {
            return Ok(id);
        }
    }

    let needle = trimmed.to_ascii_lowercase();
    let mut matches = tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(task), None) if !needle.is_empty() => Ok(task.id),
        (Some(_), Some(_)) => Err(CliError::AmbiguousTask(reference.to_string())),
        _ => Err(CliError::UnknownTask(reference.to_string())),
    }
}

fn position_ref(tasks: &[Task], digits: &str) -> Option<TaskId> {
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    digits
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| tasks.get(index))
        .map(|task| task.id)
}
