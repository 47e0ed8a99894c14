//! Todo List State
//!
//! In-memory copy of the remote collection plus the transient UI state
//! that goes with it (pending ids, notification, loading and draft).

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Failure;
use crate::models::{Todo, TodoId};
use crate::notification::{Notification, Ticket};
use crate::pending::PendingIds;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    /// Server order, created todos appended
    pub todos: Vec<Todo>,
    pub pending: PendingIds,
    pub notification: Notification,
    /// Initial load in flight
    pub loading: bool,
    /// Todo being created, shown with its loader until the server answers
    pub draft: Option<Todo>,
}

impl TodoList {
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Replace the record with the same id, if still present
    pub fn replace(&mut self, updated: Todo) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *todo = updated;
        }
    }

    pub fn remove(&mut self, id: TodoId) {
        self.todos.retain(|todo| todo.id != id);
    }

    pub fn remove_all(&mut self, ids: &[TodoId]) {
        self.todos.retain(|todo| !ids.contains(&todo.id));
    }

    pub fn set_completed(&mut self, ids: &[TodoId], completed: bool) {
        for todo in self.todos.iter_mut().filter(|todo| ids.contains(&todo.id)) {
            todo.completed = completed;
        }
    }

    /// Target state of toggle-all and the ids that need to change.
    /// `None` when every todo already has the target state.
    pub fn toggle_all_plan(&self) -> Option<(bool, Vec<TodoId>)> {
        let target = self.todos.iter().any(|todo| !todo.completed);
        let ids: Vec<TodoId> = self
            .todos
            .iter()
            .filter(|todo| todo.completed != target)
            .map(|todo| todo.id)
            .collect();

        if ids.is_empty() {
            None
        } else {
            Some((target, ids))
        }
    }

    pub fn completed_ids(&self) -> Vec<TodoId> {
        self.todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|todo| todo.completed)
    }

    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }

    pub fn is_pending(&self, id: TodoId) -> bool {
        self.pending.contains(id)
    }

    pub fn notify(&mut self, failure: Failure) -> Ticket {
        self.notification.show(failure)
    }
}

/// Footer counter text
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

/// Mutable access to the `TodoList` wherever the UI keeps it.
///
/// Every mutation goes through `update` and returns before the next
/// `.await`, so no borrow of the state is ever held across a request.
pub trait ListHandle {
    fn update<T>(&self, f: impl FnOnce(&mut TodoList) -> T) -> T;
}

impl ListHandle for Rc<RefCell<TodoList>> {
    fn update<T>(&self, f: impl FnOnce(&mut TodoList) -> T) -> T {
        f(&mut self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn list_of(todos: Vec<Todo>) -> TodoList {
        TodoList {
            todos,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_all_plan() {
        // Some active: complete the active ones
        let list = list_of(vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)]);
        assert_eq!(list.toggle_all_plan(), Some((true, vec![1, 3])));

        // All completed: reactivate everything
        let list = list_of(vec![make_todo(1, true), make_todo(2, true)]);
        assert_eq!(list.toggle_all_plan(), Some((false, vec![1, 2])));

        assert_eq!(list_of(vec![]).toggle_all_plan(), None);
    }

    #[test]
    fn test_counters() {
        let list = list_of(vec![make_todo(1, false), make_todo(2, true)]);
        assert_eq!(list.active_count(), 1);
        assert!(list.has_completed());
        assert!(!list.all_completed());
        assert_eq!(list.completed_ids(), vec![2]);

        assert!(!list_of(vec![]).all_completed());
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(5), "5 items left");
    }

    #[test]
    fn test_replace_ignores_removed_todo() {
        let mut list = list_of(vec![make_todo(1, false)]);
        list.remove(1);
        list.replace(make_todo(1, true));
        assert!(list.todos.is_empty());
    }
}
