//! Listing toolbar: search, category filter, sort key and direction.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Category, SortKey, SortOrder};

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let listing = ctx.listing;

    let search = move || listing.filter.with(|f| f.search.clone());
    let category = move || listing.filter.with(|f| f.category.clone());
    let sort_key = move || {
        listing
            .filter
            .with(|f| f.sort_by.map(SortKey::as_str).unwrap_or_default())
    };
    let descending = Signal::derive(move || listing.filter.with(|f| f.sort_order == SortOrder::Desc));

    view! {
        <div class=css::toolbar role="search">
            <label class=css::search>
                <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder="Search files"
                    aria-label="Search files by name"
                    prop:value=search
                    on:input=move |ev| listing.set_search(event_target_value(&ev))
                />
            </label>

            <select
                class=css::select
                aria-label="Category"
                prop:value=category
                on:change=move |ev| listing.set_category(event_target_value(&ev))
            >
                <option value="">"All categories"</option>
                {Category::KNOWN
                    .iter()
                    .map(|c| {
                        let label = c.as_str().to_string();
                        view! { <option value=label.clone()>{label.clone()}</option> }
                    })
                    .collect_view()}
            </select>

            <select
                class=css::select
                aria-label="Sort by"
                prop:value=sort_key
                on:change=move |ev| listing.set_sort_key(SortKey::parse(&event_target_value(&ev)))
            >
                {SortKey::ALL
                    .iter()
                    .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                    .collect_view()}
            </select>

            <button
                class=css::iconButton
                on:click=move |_| listing.toggle_order()
                title=move || if descending.get() { "Descending" } else { "Ascending" }
                aria-label="Toggle sort direction"
            >
                {move || {
                    let icon = if descending.get() { ic::SORT_DESC } else { ic::SORT_ASC };
                    view! { <Icon icon=icon /> }
                }}
            </button>
        </div>
    }
}
