//! Remote Store Contract
//!
//! The four calls the coordinator makes against the todos resource.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch, UserId};

/// Todos REST resource
///
/// Futures are `?Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait TodoRemote {
    /// `GET /todos?userId={user_id}`
    async fn list(&self, user_id: UserId) -> ApiResult<Vec<Todo>>;

    /// `POST /todos`, the server assigns the id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// `PATCH /todos/{id}`
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}
