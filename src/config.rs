//! App Configuration
//!
//! Values fixed at build time. `TODO_API_URL` overrides the API base URL.

const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the todos resource, without trailing slash
    pub api_base_url: &'static str,
    /// localStorage key holding the current user as `{"id": ...}`
    pub user_storage_key: &'static str,
    /// How long an error banner stays up
    pub notification_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL),
            user_storage_key: "user",
            notification_delay_ms: 3000,
        }
    }
}
