//! File details dialog.
//!
//! Shows the metadata already in the listing snapshot, the bundled business
//! record when present, and the linked resources fetched on open.

use leptos::prelude::*;

use super::frame::Modal;
use crate::app::AppContext;
use crate::components::files::UserLine;
use crate::core::LoadState;
use crate::models::{FileRecord, LinkedRecord};
use crate::utils::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/dialogs/dialog.module.css");

#[component]
pub fn DetailsDialog(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let linked = ctx.dialogs.linked;

    let access = file
        .access_level
        .iter()
        .map(|scope| view! { <span class=css::chip>{scope.clone()}</span> })
        .collect_view();
    let record = file.linked_resources.clone().map(|r| view! { <RecordSection record=r /> });

    let resources = move || {
        linked.with(|slot| match slot.state() {
            LoadState::Closed | LoadState::Loading { .. } => {
                view! { <p class=css::muted>"Loading linked resources…"</p> }.into_any()
            }
            LoadState::Loaded { items, .. } if items.is_empty() => {
                view! { <p class=css::muted>"No linked resources"</p> }.into_any()
            }
            LoadState::Loaded { items, .. } => view! {
                <ul class=css::list>
                    {items
                        .iter()
                        .map(|r| {
                            view! {
                                <li class=css::listItem>
                                    <span class=css::chip>{r.kind.to_string()}</span>
                                    <span>{r.name.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any(),
            LoadState::Failed { error, .. } => view! {
                <p class=css::error role="alert">
                    {format!("Linked resources could not be loaded: {error}")}
                </p>
            }
            .into_any(),
        })
    };

    view! {
        <Modal title=file.name.clone()>
            <section class=css::section>
                <h3 class=css::sectionTitle>"File information"</h3>
                <dl class=css::facts>
                    <dt>"Uploaded by"</dt>
                    <dd><UserLine user=file.created_by.clone() /></dd>
                    <dt>"Created"</dt>
                    <dd>{format_date(&file.created_at)}</dd>
                    <dt>"Last modified"</dt>
                    <dd>{format!("{} by {}", format_date(&file.last_modified), file.modified_by.name)}</dd>
                    <dt>"Type"</dt>
                    <dd>{file.file_type.clone()}</dd>
                    <dt>"Format"</dt>
                    <dd>{file.format.clone()}</dd>
                    <dt>"Size"</dt>
                    <dd>{format_size(file.size)}</dd>
                    <dt>"Category"</dt>
                    <dd style=format!("color: {}", file.category.color())>{file.category.to_string()}</dd>
                    <dt>"Access"</dt>
                    <dd class=css::chips>{access}</dd>
                </dl>
            </section>
            {record}
            <section class=css::section>
                <h3 class=css::sectionTitle>"Linked resources"</h3>
                {resources}
            </section>
        </Modal>
    }
}

#[component]
fn RecordSection(record: LinkedRecord) -> impl IntoView {
    view! {
        <section class=css::section>
            <h3 class=css::sectionTitle>"Business record"</h3>
            <dl class=css::facts>
                <dt>"Order"</dt>
                <dd>{record.order_id}</dd>
                <dt>"Order date"</dt>
                <dd>{record.order_date}</dd>
                <dt>"Customer"</dt>
                <dd>{record.customer_name}</dd>
                <dt>"Delivery date"</dt>
                <dd>{record.delivery_date}</dd>
                <dt>"Related"</dt>
                <dd>
                    <a href=record.related_resource_url>{record.related_resource_name}</a>
                </dd>
            </dl>
        </section>
    }
}
