//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::{Store, Subfield};
use resource_sync::{distinct_tags, Record, ResourceStore, TagFilter};

use crate::models::{RosterEntry, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks of the current parent
    pub tasks: ResourceStore<Task>,
    /// Roster (Kader) of the current parent
    pub roster: ResourceStore<RosterEntry>,
    /// Tag selection for the tasks table
    pub task_filter: TagFilter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Record kinds that live in `AppState`
pub trait StoredResource: Record<Draft: Send + Sync> + Send + Sync {
    fn field(store: AppStore) -> Subfield<AppStore, AppState, ResourceStore<Self>>;
}

impl StoredResource for Task {
    fn field(store: AppStore) -> Subfield<AppStore, AppState, ResourceStore<Self>> {
        store.tasks()
    }
}

impl StoredResource for RosterEntry {
    fn field(store: AppStore) -> Subfield<AppStore, AppState, ResourceStore<Self>> {
        store.roster()
    }
}

/// Drop selected tags that left the task list
pub fn prune_task_filter(store: &AppStore) {
    let tags = store.tasks().with(|tasks| distinct_tags(tasks.records()));
    let filter = store.task_filter();
    if filter.with_untracked(|f| f.selection().iter().any(|t| !tags.contains(t))) {
        filter.update(|f| f.retain_known(&tags));
    }
}
