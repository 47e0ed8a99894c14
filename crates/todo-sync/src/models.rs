//! Wire Models
//!
//! Data structures matching the remote todos resource.

use serde::{Deserialize, Serialize};

pub type TodoId = u32;
pub type UserId = u32;

/// Todo record as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Placeholder rendered while a create request is in flight.
    /// The server has not assigned an id yet, so it carries id 0.
    pub fn draft(user_id: UserId, title: &str) -> Self {
        Self {
            id: 0,
            user_id,
            title: title.to_string(),
            completed: false,
        }
    }
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(user_id: UserId, title: &str) -> Self {
        Self {
            user_id,
            title: title.to_string(),
            completed: false,
        }
    }
}

/// Body of `PATCH /todos/{id}`, only the present fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_uses_camel_case_on_the_wire() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "userId": 42,
            "title": "buy milk",
            "completed": true,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(todo.id, 7);
        assert_eq!(todo.user_id, 42);
        assert!(todo.completed);
    }

    #[test]
    fn test_new_todo_body() {
        let body = serde_json::to_value(NewTodo::new(42, "buy milk")).unwrap();
        assert_eq!(body, json!({ "userId": 42, "title": "buy milk", "completed": false }));
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        assert_eq!(serde_json::to_value(TodoPatch::completed(true)).unwrap(), json!({ "completed": true }));
        assert_eq!(serde_json::to_value(TodoPatch::title("x")).unwrap(), json!({ "title": "x" }));
    }
}
