//! Todo App Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod store;
mod user;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Starting todo app");
    mount_to_body(App);
}
