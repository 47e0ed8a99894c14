//! Filter Links Component

use leptos::prelude::*;
use todo_sync::Filter;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Hash links for All / Active / Completed, the current one `selected`
#[component]
pub fn FilterLinks() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="filter" data-cy="Filter">
            {Filter::ALL.into_iter().map(|filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <a
                        href=filter.href()
                        class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                        data-cy=filter.data_cy()
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
