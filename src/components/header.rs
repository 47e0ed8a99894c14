//! Header Component
//!
//! Toggle-all button and the new todo field.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::NewTodoField;
use crate::context::use_app_context;
use crate::store::{store_has_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // `active` only when every todo is completed
    let toggle_all_class = move || {
        if store.list().with(|list| list.all_completed()) {
            "todoapp__toggle-all active"
        } else {
            "todoapp__toggle-all"
        }
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || store_has_todos(&store)>
                <button
                    type="button"
                    class=toggle_all_class
                    data-cy="ToggleAllButton"
                    on:click=move |_| {
                        spawn_local(async move {
                            ctx.sync.toggle_all().await;
                        });
                    }
                />
            </Show>

            <NewTodoField />
        </header>
    }
}
