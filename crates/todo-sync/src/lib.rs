//! Todo Sync Core
//!
//! Todo list state kept in step with a remote todos resource.
//! Contains no browser code: the UI supplies a `TodoRemote` implementation
//! and a `ListHandle` over whatever reactive container it stores state in.

mod error;
mod filter;
mod models;
mod notification;
mod pending;
mod remote;
mod state;
mod sync;


pub use error::{ApiError, ApiResult, Failure};
pub use filter::{visible, Filter};
pub use models::{NewTodo, Todo, TodoId, TodoPatch, UserId};
pub use notification::{Notification, Ticket};
pub use pending::PendingIds;
pub use remote::TodoRemote;
pub use state::{items_left_label, ListHandle, TodoList};
pub use sync::TodoSync;
