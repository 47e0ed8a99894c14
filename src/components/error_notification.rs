//! Error Notification Component
//!
//! Banner for the last failure. Never unmounted: the `hidden` class hides it
//! so the message can fade out.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let class = move || {
        if store.list().with(|list| list.notification.is_visible()) {
            "notification is-danger is-light has-text-weight-normal"
        } else {
            "notification is-danger is-light has-text-weight-normal hidden"
        }
    };
    let message = move || store.list().with(|list| list.notification.text());

    view! {
        <div data-cy="ErrorNotification" class=class>
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.sync.dismiss_notification()
            />
            {message}
        </div>
    }
}
