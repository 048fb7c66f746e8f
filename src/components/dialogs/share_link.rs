//! Share link dialog.
//!
//! The link is derived from the file name when the dialog opens and can be
//! edited by hand. Copying shows a confirmation for `COPY_FEEDBACK_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::frame::Modal;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::models::{FileRecord, LinkAccess};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/dialogs/dialog.module.css");

#[component]
pub fn ShareLinkDialog(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.dialogs.share_link;
    let file_id = StoredValue::new(file.id.clone());

    let link = move || state.with(|s| s.link().to_string());
    let copied = Memo::new(move |_| state.with(|s| s.copied()));
    let require_login = move || state.with(|s| s.access() == LinkAccess::RequireLogin);

    let copy = move |_: MouseEvent| {
        // Only one clipboard write at a time; a second click while one is
        // pending is dropped.
        let guard = match state.with_untracked(|s| s.begin_copy()) {
            Ok(guard) => guard,
            Err(e) => {
                tracing::debug!(error = %e, "copy ignored");
                return;
            }
        };
        let text = state.with_untracked(|s| s.link().to_string());

        spawn_local(async move {
            let result = dom::copy_to_clipboard(&text).await;
            drop(guard);

            let generation = match result {
                Ok(()) => state.try_update(|s| s.mark_copied()),
                Err(e) => {
                    ctx.report("copy link", &file_id.get_value(), &e);
                    return;
                }
            };
            let Some(generation) = generation else {
                return;
            };

            TimeoutFuture::new(COPY_FEEDBACK_MS).await;
            state.try_update(|s| s.expire(generation));
        });
    };

    view! {
        <Modal title=format!("Share \"{}\"", file.name)>
            <section class=css::section>
                <label class=css::fieldLabel for="share-link">"Link"</label>
                <div class=css::linkRow>
                    <span class=css::linkIcon aria-hidden="true"><Icon icon=ic::LINK /></span>
                    <input
                        id="share-link"
                        class=css::input
                        type="text"
                        prop:value=link
                        on:input=move |ev| state.update(|s| s.edit(event_target_value(&ev)))
                    />
                    <button
                        class=move || {
                            if copied.get() {
                                format!("{} {}", css::button, css::buttonDone)
                            } else {
                                css::button.to_string()
                            }
                        }
                        on:click=copy
                    >
                        {move || {
                            if copied.get() {
                                view! { <Icon icon=ic::CHECK /> "Copied" }.into_any()
                            } else {
                                view! { <Icon icon=ic::COPY /> "Copy" }.into_any()
                            }
                        }}
                    </button>
                </div>
            </section>
            <section class=css::section>
                <label class=css::toggle>
                    <input
                        type="checkbox"
                        prop:checked=require_login
                        on:change=move |ev| {
                            let access = if event_target_checked(&ev) {
                                LinkAccess::RequireLogin
                            } else {
                                LinkAccess::Public
                            };
                            state.update(|s| s.set_access(access));
                        }
                    />
                    "Require sign-in to open the link"
                </label>
                <p class=css::muted>
                    {move || {
                        if require_login() {
                            "Only signed-in users can open this link."
                        } else {
                            "Anyone with the link can view this file."
                        }
                    }}
                </p>
            </section>
        </Modal>
    }
}
