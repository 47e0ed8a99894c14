//! Todo List Component
//!
//! Visible todos followed by the draft of a todo being created.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_visible_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible_todos = move || store_visible_todos(&store);
    let draft = move || store.list().with(|list| list.draft.clone());

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=visible_todos
                // Key on the mutable fields too so edits re-render the row
                key=|todo| (todo.id, todo.completed, todo.title.clone())
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || draft().map(|todo| view! { <TodoItem todo=todo draft=true /> })}
        </section>
    }
}
