//! Bulk action bar, shown while any row is selected.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::SelectionSet;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn BulkBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.listing.selection;
    let count = Memo::new(move |_| selection.with(SelectionSet::len));

    view! {
        <Show when=move || { count.get() > 0 }>
            <div class=css::bulkBar role="toolbar" aria-label="Selected files">
                <span class=css::bulkCount>
                    {move || format!("{} selected", count.get())}
                </span>
                <button class=css::button on:click=move |_| ctx.download_selected()>
                    <Icon icon=ic::DOWNLOAD />
                    "Download selected"
                </button>
                <button
                    class=css::buttonGhost
                    on:click=move |_| selection.update(SelectionSet::clear_all)
                >
                    "Clear selection"
                </button>
            </div>
        </Show>
    }
}
