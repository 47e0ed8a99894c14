//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_sync::TodoSync;

use crate::api::RemoteTodos;
use crate::config::AppConfig;
use crate::store::StoreHandle;

pub type AppSync = TodoSync<RemoteTodos, StoreHandle>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Runs every remote operation against the store
    pub sync: AppSync,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(sync: AppSync, config: AppConfig) -> Self {
        Self { sync, config }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
