//! User Identity
//!
//! The current user is read once from localStorage at start-up.

use serde::Deserialize;
use todo_sync::UserId;

#[derive(Deserialize)]
struct StoredUser {
    id: UserId,
}

/// User id saved under `key`, if any. A zero id counts as no user.
pub fn configured_user_id(key: &str) -> Option<UserId> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(key).ok()??;
    let user_id = parse_user_id(&json);
    if user_id.is_none() {
        log::warn!("[USER] No usable user under localStorage key '{}'", key);
    }
    user_id
}

fn parse_user_id(json: &str) -> Option<UserId> {
    serde_json::from_str::<StoredUser>(json)
        .ok()
        .map(|user| user.id)
        .filter(|&id| id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(r#"{"id": 1234, "name": "Ann"}"#), Some(1234));
        assert_eq!(parse_user_id(r#"{"id": 0}"#), None);
        assert_eq!(parse_user_id(r#"{"name": "Ann"}"#), None);
        assert_eq!(parse_user_id("not json"), None);
    }
}
