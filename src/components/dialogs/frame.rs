//! Modal frame shared by every dialog.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/dialogs/dialog.module.css");

/// Backdrop plus titled panel. Clicking the backdrop, the close button or
/// pressing Escape closes the dialog.
#[component]
pub fn Modal(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let close = move |_: MouseEvent| ctx.close_dialog();
    let on_key = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_dialog();
        }
    };

    view! {
        <div class=css::backdrop on:click=close on:keydown=on_key>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                tabindex="-1"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <header class=css::dialogHeader>
                    <h2 class=css::dialogTitle>{title.clone()}</h2>
                    <button class=css::closeButton on:click=close aria-label="Close">
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::dialogBody>{children()}</div>
            </div>
        </div>
    }
}
