//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{Filter, ListHandle, Todo, TodoId, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos with their pending ids, banner and loading flags
    pub list: TodoList,
    /// Current footer filter, bound to the location hash
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Lets the sync coordinator mutate the list held by the store
#[derive(Clone, Copy)]
pub struct StoreHandle(pub AppStore);

impl ListHandle for StoreHandle {
    fn update<T>(&self, f: impl FnOnce(&mut TodoList) -> T) -> T {
        let binding = self.0.list();
        let mut list = binding.write();
        f(&mut list)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Todos passing the current filter, in list order
pub fn store_visible_todos(store: &AppStore) -> Vec<Todo> {
    let filter = store.filter().get();
    store.list().with(|list| filter.apply(&list.todos))
}

pub fn store_is_pending(store: &AppStore, id: TodoId) -> bool {
    store.list().with(|list| list.is_pending(id))
}

pub fn store_has_todos(store: &AppStore) -> bool {
    store.list().with(|list| !list.todos.is_empty())
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}
