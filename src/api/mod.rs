//! Remote API
//!
//! HTTP bindings to the todos REST resource.

mod todos;

pub use todos::RemoteTodos;
