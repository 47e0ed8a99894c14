//! User Warning Component
//!
//! Shown instead of the app when no user is saved in localStorage.

use leptos::prelude::*;

#[component]
pub fn UserWarning(storage_key: &'static str) -> impl IntoView {
    view! {
        <section class="section user-warning">
            <p class="box is-size-3">
                "No user configured. Save your user in localStorage under the "
                <code>{storage_key}</code>
                " key, e.g. "
                <code>{r#"{"id": 1234}"#}</code>
                ", and reload the page."
            </p>
        </section>
    }
}
