//! Filter Bar Component
//!
//! Search box, category dropdown and the add-category input.

use leptos::prelude::*;
use notes_core::services::ALL_CATEGORIES;

use crate::store::{store_add_category, use_popup_store, PopupStateStoreFields};

/// Add-category input; the category only lives for this popup session
#[component]
fn CategoryAddInput() -> impl IntoView {
    let store = use_popup_store();
    let (new_category, set_new_category) = signal(String::new());

    let add_category = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_category.get();
        if store_add_category(&store, &name) {
            set_new_category.set(String::new());
        }
    };

    view! {
        <form class="category-add-form" on:submit=add_category>
            <input
                type="text"
                placeholder="New category..."
                prop:value=move || new_category.get()
                on:input=move |ev| set_new_category.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_popup_store();

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search notes..."
                prop:value=move || store.filter().with(|f| f.search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    store.filter().update(|f| f.search = term);
                }
            />
            <select
                class="category-filter"
                prop:value=move || store.filter().with(|f| f.category.clone())
                on:change=move |ev| {
                    let category = event_target_value(&ev);
                    store.filter().update(|f| f.category = category);
                }
            >
                <option value=ALL_CATEGORIES>"All categories"</option>
                {move || store.session().with(|s| s.categories()).into_iter().map(|cat| {
                    let label = cat.clone();
                    view! { <option value=cat>{label}</option> }
                }).collect_view()}
            </select>
            <CategoryAddInput />
        </div>
    }
}
