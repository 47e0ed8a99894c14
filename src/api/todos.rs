//! Todos Resource
//!
//! `TodoRemote` over gloo-net. Non-2xx answers become `ApiError::Status`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use todo_sync::{ApiError, ApiResult, NewTodo, Todo, TodoId, TodoPatch, TodoRemote, UserId};

#[derive(Debug, Clone, Copy)]
pub struct RemoteTodos {
    base_url: &'static str,
}

impl RemoteTodos {
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoRemote for RemoteTodos {
    async fn list(&self, user_id: UserId) -> ApiResult<Vec<Todo>> {
        let url = format!("{}/todos?userId={}", self.base_url, user_id);
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let url = format!("{}/todos", self.base_url);
        log::debug!("[API] POST {}", url);
        let response = Request::post(&url)
            .json(todo)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        let url = self.todo_url(id);
        log::debug!("[API] PATCH {}", url);
        let response = Request::patch(&url)
            .json(patch)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let url = self.todo_url(id);
        log::debug!("[API] DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }
}
