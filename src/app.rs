//! Todo App
//!
//! Root component: gates on the configured user, then wires the store,
//! the sync coordinator, hash routing and the banner timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::{Filter, TodoList, TodoSync, UserId};

use crate::api::RemoteTodos;
use crate::components::{ErrorNotification, Footer, Header, TodoList as TodoListView, UserWarning};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_has_todos, store_set_filter, AppState, AppStateStoreFields, StoreHandle};
use crate::user;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    match user::configured_user_id(config.user_storage_key) {
        Some(user_id) => view! { <TodoApp config=config user_id=user_id /> }.into_any(),
        None => view! { <UserWarning storage_key=config.user_storage_key /> }.into_any(),
    }
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
fn TodoApp(config: AppConfig, user_id: UserId) -> impl IntoView {
    // State
    let store = Store::new(AppState {
        list: TodoList::default(),
        filter: Filter::from_hash(&current_hash()),
    });
    provide_context(store);

    let sync = TodoSync::new(RemoteTodos::new(config.api_base_url), StoreHandle(store), user_id);
    let ctx = AppContext::new(sync, config);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.sync.load().await;
        });
    });

    // Follow the filter links
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        store_set_filter(&store, Filter::from_hash(&current_hash()));
    });
    on_cleanup(move || hash_listener.remove());

    // Auto-dismiss the banner; a newer message gets a new ticket and its own timer
    let banner = Memo::new(move |_| {
        store.list().with(|list| (list.notification.is_visible(), list.notification.ticket()))
    });
    Effect::new(move |_| {
        let (visible, ticket) = banner.get();
        if visible {
            spawn_local(async move {
                TimeoutFuture::new(ctx.config.notification_delay_ms).await;
                ctx.sync.expire_notification(ticket);
            });
        }
    });

    let show_list = move || store.list().with(|list| !list.todos.is_empty() || list.draft.is_some());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <Show when=show_list>
                    <TodoListView />
                </Show>

                // Hidden while there are no todos
                <Show when=move || store_has_todos(&store)>
                    <Footer />
                </Show>
            </div>

            // Always rendered so hiding can fade out
            <ErrorNotification />
        </div>
    }
}
