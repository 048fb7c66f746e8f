//! File manager page.
//!
//! Lays out the toolbar, bulk bar, table and pager over one memoized page of
//! the listing, and hosts the per-file dialogs.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{BulkBar, FileTable, Pager, Toolbar};
use crate::app::AppContext;
use crate::components::dialogs::DialogHost;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn FileManager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = Memo::new(move |_| ctx.listing.visible());
    let rows = Signal::derive(move || visible.get().rows);
    let total = Signal::derive(move || visible.get().total_matching);
    let file_count = Signal::derive(move || ctx.listing.files.with(Vec::len));

    view! {
        <main class=css::manager>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <span class=css::subtitle>
                    {move || match file_count.get() {
                        1 => "1 file".to_string(),
                        n => format!("{n} files"),
                    }}
                </span>
            </header>
            <NoticeBar />
            <Toolbar />
            <BulkBar />
            <FileTable rows=rows />
            <Pager total=total />
            <DialogHost />
        </main>
    }
}

/// Last reported failure with a dismiss button.
#[component]
fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notice = ctx.notice;

    move || {
        notice.get().map(|message| {
            view! {
                <div class=css::notice role="alert">
                    <span>{message}</span>
                    <button
                        class=css::iconButton
                        on:click=move |_| notice.set(None)
                        aria-label="Dismiss"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}
