//! UI Components
//!
//! Leptos components of the todo app. Every interactive element carries a
//! `data-cy` attribute used by the end-to-end test suite.

mod error_notification;
mod filter_links;
mod footer;
mod header;
mod new_todo_field;
mod todo_item;
mod todo_list;
mod user_warning;

pub use error_notification::ErrorNotification;
pub use filter_links::FilterLinks;
pub use footer::Footer;
pub use header::Header;
pub use new_todo_field::NewTodoField;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use user_warning::UserWarning;
