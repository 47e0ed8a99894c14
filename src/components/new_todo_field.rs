//! New Todo Field Component
//!
//! Input for creating todos. Disabled while a create is in flight,
//! cleared on success and kept as typed on failure.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoField() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let creating = move || store.list().with(|list| list.draft.is_some());

    // Focus on mount and again once a create settles
    Effect::new(move |_| {
        if creating() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating() {
            return;
        }
        let text = title.get_untracked();
        spawn_local(async move {
            if ctx.sync.create_one(&text).await.is_ok() {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <form on:submit=create_todo>
            <input
                node_ref=input_ref
                data-cy="NewTodoField"
                type="text"
                class="todoapp__new-todo"
                placeholder="What needs to be done?"
                prop:value=move || title.get()
                prop:disabled=creating
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
        </form>
    }
}
