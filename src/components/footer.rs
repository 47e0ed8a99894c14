//! Footer Component
//!
//! Active counter, filter links and the clear-completed button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::items_left_label;

use crate::components::FilterLinks;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let items_left = move || store.list().with(|list| items_left_label(list.active_count()));
    let has_completed = move || store.list().with(|list| list.has_completed());

    view! {
        <footer class="todoapp__footer" data-cy="Footer">
            <span class="todo-count" data-cy="TodosCounter">
                {items_left}
            </span>

            <FilterLinks />

            <button
                type="button"
                class="todoapp__clear-completed"
                data-cy="ClearCompletedButton"
                prop:disabled=move || !has_completed()
                on:click=move |_| {
                    spawn_local(async move {
                        ctx.sync.clear_completed().await;
                    });
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
