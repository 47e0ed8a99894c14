//! Filter Selector
//!
//! Maps the todo collection and a filter mode to the visible subset.
//! Filter modes are bound to hash routes (`#/`, `#/active`, `#/completed`).

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Display order of the footer links
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Visible subset, order preserved
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|todo| self.matches(todo)).cloned().collect()
    }

    pub fn href(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    /// Parse `location.hash`; anything unrecognised shows everything
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// `data-cy` selector of the footer link
    pub fn data_cy(&self) -> &'static str {
        match self {
            Filter::All => "FilterLinkAll",
            Filter::Active => "FilterLinkActive",
            Filter::Completed => "FilterLinkCompleted",
        }
    }
}

/// Todos that `filter` lets through
pub fn visible(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    filter.apply(todos)
}
