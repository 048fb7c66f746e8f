//! Access dialog: per-user share grants for one file.
//!
//! Grants are never patched locally. After a share or removal succeeds the
//! list is fetched again.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::frame::Modal;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::LoadState;
use crate::models::{CreateShareRequest, FileRecord, ShareGrant, SharePermission};

stylance::import_crate_style!(css, "src/components/dialogs/dialog.module.css");

#[component]
pub fn AccessDialog(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let grants = ctx.dialogs.grants;
    let users = ctx.dialogs.users;
    let file_id = StoredValue::new(file.id.clone());

    let picked_user = RwSignal::new(String::new());
    let permission = RwSignal::new(SharePermission::default());
    let busy = RwSignal::new(false);

    let share = move |_: MouseEvent| {
        let user_id = picked_user.get_untracked();
        let Some(user) = users.with_untracked(|all| all.iter().find(|u| u.id == user_id).cloned())
        else {
            return;
        };
        let request = CreateShareRequest {
            user_id: user.id,
            user_name: user.name,
            permission: permission.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            let id = file_id.get_value();
            match ctx.service().create_share(&id, request).await {
                Ok(()) => {
                    tracing::info!(file_id = %id, "share created");
                    picked_user.set(String::new());
                    ctx.reload_grants();
                }
                Err(e) => ctx.report("share file", &id, &e),
            }
            busy.set(false);
        });
    };

    let grant_list = move || {
        grants.with(|slot| match slot.state() {
            LoadState::Closed | LoadState::Loading { .. } => {
                view! { <p class=css::muted>"Loading shares…"</p> }.into_any()
            }
            LoadState::Loaded { items, .. } if items.is_empty() => {
                view! { <p class=css::muted>"Not shared with anyone yet"</p> }.into_any()
            }
            LoadState::Loaded { items, .. } => view! {
                <ul class=css::list>
                    {items
                        .iter()
                        .map(|grant| view! { <GrantRow grant=grant.clone() file_id=file_id.get_value() /> })
                        .collect_view()}
                </ul>
            }
            .into_any(),
            LoadState::Failed { error, .. } => view! {
                <p class=css::error role="alert">
                    {format!("Shares could not be loaded: {error}")}
                </p>
            }
            .into_any(),
        })
    };

    view! {
        <Modal title=format!("Manage access to \"{}\"", file.name)>
            <section class=css::section>
                <h3 class=css::sectionTitle>"Share with"</h3>
                <div class=css::shareForm>
                    <select
                        class=css::input
                        aria-label="User"
                        prop:value=move || picked_user.get()
                        on:change=move |ev| picked_user.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a user"</option>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|u| view! { <option value=u.id>{u.name}</option> })
                                .collect_view()
                        }}
                    </select>
                    <select
                        class=css::input
                        aria-label="Permission"
                        prop:value=move || permission.get().to_string()
                        on:change=move |ev| permission.set(SharePermission::from(event_target_value(&ev)))
                    >
                        {SharePermission::CHOICES
                            .iter()
                            .map(|p| {
                                let value = p.to_string();
                                view! { <option value=value.clone()>{value.clone()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class=css::button
                        disabled=move || picked_user.with(String::is_empty) || busy.get()
                        on:click=share
                    >
                        <Icon icon=ic::SHARE />
                        "Share"
                    </button>
                </div>
            </section>
            <section class=css::section>
                <h3 class=css::sectionTitle>"People with access"</h3>
                {grant_list}
            </section>
        </Modal>
    }
}

#[component]
fn GrantRow(grant: ShareGrant, file_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let share_id = grant.id.clone();

    let remove = move |_: MouseEvent| {
        let file_id = file_id.clone();
        let share_id = share_id.clone();
        spawn_local(async move {
            match ctx.service().remove_share(&file_id, &share_id).await {
                Ok(()) => {
                    tracing::info!(file_id = %file_id, share_id = %share_id, "share removed");
                    ctx.reload_grants();
                }
                Err(e) => ctx.report("remove share", &file_id, &e),
            }
        });
    };

    view! {
        <li class=css::listItem>
            <span class=css::userIcon aria-hidden="true"><Icon icon=ic::USER /></span>
            <span class=css::grow>{grant.user_name.clone()}</span>
            <span class=css::chip>{grant.permission.to_string()}</span>
            <button
                class=css::closeButton
                on:click=remove
                aria-label=format!("Remove access for {}", grant.user_name)
            >
                <Icon icon=ic::TRASH />
            </button>
        </li>
    }
}
