//! Error Types
//!
//! `ApiError` describes what went wrong on the wire.
//! `Failure` is what the user gets to see; every failed operation maps to one.

use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    Status { status: u16, body: String },
    /// The response body did not match the expected shape
    Decode(String),
    /// The request body could not be serialized
    Encode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Encode(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// User-facing failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    LoadTodos,
    EmptyTitle,
    AddTodo,
    UpdateTodo,
    DeleteTodo,
}

impl Failure {
    pub fn message(&self) -> &'static str {
        match self {
            Failure::LoadTodos => "Unable to load todos",
            Failure::EmptyTitle => "Title should not be empty",
            Failure::AddTodo => "Unable to add a todo",
            Failure::UpdateTodo => "Unable to update a todo",
            Failure::DeleteTodo => "Unable to delete a todo",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Failure {}
