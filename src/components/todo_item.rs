//! Todo Item Component
//!
//! A single todo row: status checkbox, title (double-click to edit),
//! delete button and the loader overlay shown while a request is pending.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::Todo;

use crate::context::use_app_context;
use crate::store::{store_is_pending, use_app_store};

#[component]
pub fn TodoItem(
    todo: Todo,
    /// Placeholder of a todo being created, always loading and inert
    #[prop(optional)]
    draft: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = StoredValue::new(todo.title);

    let (editing, set_editing) = signal(false);
    let (edit_text, set_edit_text) = signal(String::new());
    let edit_ref = NodeRef::<html::Input>::new();

    let loading = move || draft || store_is_pending(&store, id);

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // The checkbox only follows the server: the click is cancelled and the
    // row re-renders once the update is confirmed
    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if draft {
            return;
        }
        spawn_local(async move {
            ctx.sync.toggle_one(id).await;
        });
    };

    let delete = move |_| {
        if draft {
            return;
        }
        spawn_local(async move {
            let _ = ctx.sync.delete_one(id).await;
        });
    };

    let start_editing = move |_| {
        if draft {
            return;
        }
        set_edit_text.set(title.get_value());
        set_editing.set(true);
    };

    // Enter and blur both land here; skip while the previous save is in flight
    let save = move || {
        if loading() {
            return;
        }
        let text = edit_text.get_untracked();
        spawn_local(async move {
            if ctx.sync.rename_one(id, &text).await.is_ok() {
                // The row may already be gone after a delete or re-key
                let _ = set_editing.try_set(false);
            }
        });
    };

    view! {
        <div data-cy="Todo" class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    on:click=toggle
                />
            </label>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span data-cy="TodoTitle" class="todo__title" on:dblclick=start_editing>
                        {title.get_value()}
                    </span>

                    <button type="button" class="todo__remove" data-cy="TodoDelete" on:click=delete>
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    save();
                }>
                    <input
                        node_ref=edit_ref
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        prop:value=move || edit_text.get()
                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                // A trailing blur then saves the unchanged title, which is a no-op
                                set_edit_text.set(title.get_value());
                                set_editing.set(false);
                            }
                        }
                    />
                </form>
            </Show>

            <div
                data-cy="TodoLoader"
                class=move || if loading() { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
