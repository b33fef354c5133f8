//! Category `<select>` above the front-page grid.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::listing::CategoryFilter;

#[component]
pub fn CategoryFilterSelect(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] selected: Signal<CategoryFilter>,
    on_change: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <label class="category-filter">
            <span class="category-filter__label">"Category"</span>
            <select
                class="category-filter__select"
                prop:value=move || selected.get().select_value()
                on:change=move |ev| on_change.run(CategoryFilter::from_select_value(&event_target_value(&ev)))
            >
                <option value="">"All categories"</option>
                <For each=move || categories.get() key=|c| c.id let:c>
                    <option value=c.id.to_string()>{c.name}</option>
                </For>
            </select>
        </label>
    }
}
