//! Task store plus the current view parameters.
//!
//! # Responsibility
//! - Hold search/status/category/sort parameters next to the store.
//! - Apply [`Intent`]s coming from presentation components.
//! - Recompute the projection on read.

use crate::clock::Clock;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::service::intent::{Intent, IntentOutcome};
use crate::service::task_store::{SubscriptionId, TaskStore};
use crate::view::derive::{derive_view, TaskStats};
use crate::view::query::{CategoryFilter, SortOrder, StatusFilter, ViewQuery};

/// Consumer-facing facade over a [`TaskStore`].
pub struct TaskBoard<R: TaskRepository, C: Clock> {
    store: TaskStore<R, C>,
    query: ViewQuery,
}

impl<R: TaskRepository, C: Clock> TaskBoard<R, C> {
    /// Wraps `store` with default view parameters (all, all, newest, no search).
    pub fn new(store: TaskStore<R, C>) -> Self {
        Self {
            store,
            query: ViewQuery::default(),
        }
    }

    /// Loads the store from `repo` and wraps it.
    pub fn load(repo: R, clock: C) -> Self {
        Self::new(TaskStore::load(repo, clock))
    }

    /// Applies one intent.
    pub fn dispatch(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::Add(new) => match self.store.add(new) {
                Ok(id) => IntentOutcome::Added(id),
                Err(err) => IntentOutcome::Rejected(err),
            },
            Intent::Toggle(id) => applied_if(self.store.toggle(id)),
            Intent::Delete(id) => applied_if(self.store.delete(id)),
            Intent::Edit(id, patch) => match self.store.edit(id, &patch) {
                Ok(found) => applied_if(found),
                Err(err) => IntentOutcome::Rejected(err),
            },
            Intent::ClearCompleted => IntentOutcome::Cleared(self.store.clear_completed()),
            Intent::Reorder { from, to } => applied_if(self.store.reorder(from, to)),
            Intent::SetFilter(status) => {
                self.set_filter(status);
                IntentOutcome::Applied
            }
            Intent::SetSort(sort) => {
                self.set_sort(sort);
                IntentOutcome::Applied
            }
            Intent::SetSearch(search) => {
                self.set_search(search);
                IntentOutcome::Applied
            }
            Intent::SetCategoryFilter(category) => {
                self.set_category_filter(category);
                IntentOutcome::Applied
            }
        }
    }

    /// Current projection of the list for the view parameters.
    pub fn visible(&self) -> Vec<&Task> {
        derive_view(self.store.tasks(), &self.query)
    }

    /// Counts over the unfiltered list.
    pub fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    pub fn all_tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn store(&self) -> &TaskStore<R, C> {
        &self.store
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Task]) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
    }

    pub fn set_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }
}

fn applied_if(changed: bool) -> IntentOutcome {
    if changed {
        IntentOutcome::Applied
    } else {
        IntentOutcome::Ignored
    }
}
