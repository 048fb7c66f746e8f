//! File table component.
//!
//! One row per file on the current page. Row selection is keyed by file id,
//! so it survives paging and filtering.

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::SelectionSet;
use crate::models::{FileRecord, HeaderCheck, ListStatus, UserRef};
use crate::utils::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/files/files.module.css");

const COLUMN_COUNT: usize = 8;

#[component]
pub fn FileTable(#[prop(into)] rows: Signal<Vec<FileRecord>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let listing = ctx.listing;
    let selection = listing.selection;

    let header = Memo::new(move |_| {
        let ids = listing.all_ids();
        selection.with(|s| s.header_state(ids.iter().map(String::as_str)))
    });

    let toggle_all = move |_: Event| {
        if header.get_untracked() == HeaderCheck::Checked {
            selection.update(SelectionSet::clear_all);
        } else {
            let ids = listing.files.with_untracked(|all| {
                all.iter().map(|f| f.id.clone()).collect::<Vec<_>>()
            });
            selection.update(|s| s.select_all(ids));
        }
    };

    view! {
        <div class=css::tableWrap>
            <table class=css::table>
                <thead>
                    <tr>
                        <th class=css::checkCell>
                            <input
                                type="checkbox"
                                aria-label="Select all files"
                                prop:checked=move || header.get() == HeaderCheck::Checked
                                prop:indeterminate=move || header.get() == HeaderCheck::Indeterminate
                                on:change=toggle_all
                            />
                        </th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Created"</th>
                        <th>"Last modified"</th>
                        <th>"Status"</th>
                        <th>"Flags"</th>
                        <th class=css::actionsCell></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|file| (file.id.clone(), file.last_modified, file.is_favorite(), file.is_pinned())
                        children=move |file| view! { <FileRow file=file /> }
                    />
                    <EmptyRow rows=rows />
                </tbody>
            </table>
        </div>
    }
}

/// Placeholder row while loading or when nothing matches.
#[component]
fn EmptyRow(rows: Signal<Vec<FileRecord>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let status = ctx.listing.status;

    move || {
        if !rows.with(Vec::is_empty) {
            return None;
        }
        let message = match status.get() {
            ListStatus::Loading => "Loading files…",
            ListStatus::Failed(_) => "Files could not be loaded",
            ListStatus::Ready => "No files found",
        };
        Some(view! {
            <tr>
                <td class=css::emptyCell colspan=COLUMN_COUNT.to_string()>{message}</td>
            </tr>
        })
    }
}

#[component]
fn FileRow(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selection = ctx.listing.selection;

    let id = file.id.clone();
    let is_selected = {
        let id = id.clone();
        Signal::derive(move || selection.with(|s| s.is_selected(&id)))
    };
    let toggle = {
        let id = id.clone();
        move |_: Event| selection.update(|s| s.toggle(&id))
    };

    let favorite = file.is_favorite();
    let pinned = file.is_pinned();
    let toggle_favorite = {
        let id = id.clone();
        move |_: MouseEvent| ctx.set_favorite(id.clone(), !favorite)
    };
    let (favorite_icon, favorite_title) = if favorite {
        (ic::STAR_FILL, "Remove from favorites")
    } else {
        (ic::STAR, "Add to favorites")
    };
    let toggle_pinned = {
        let id = id.clone();
        move |_: MouseEvent| ctx.set_pinned(id.clone(), !pinned)
    };

    let (pin_icon, pin_title) = if pinned {
        (ic::PIN_FILL, "Unpin")
    } else {
        (ic::PIN, "Pin")
    };

    let status = file.display_status();
    let category_label = file.category.to_string();
    let category_color = format!("color: {}", file.category.color());
    let type_line = format!("{} · {}", file.file_type, format_size(file.size));

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::rowSelected)
        } else {
            css::row.to_string()
        }
    };

    view! {
        <tr class=row_class aria-selected=move || is_selected.get().to_string()>
            <td class=css::checkCell>
                <input
                    type="checkbox"
                    aria-label=format!("Select {}", file.name)
                    prop:checked=is_selected
                    on:change=toggle
                />
            </td>
            <td>
                <div class=css::nameCell>
                    <span class=css::fileIcon aria-hidden="true"><Icon icon=ic::FILE /></span>
                    <div>
                        <div class=css::fileName>{file.name.clone()}</div>
                        <div class=css::fileMeta>{type_line}</div>
                    </div>
                </div>
            </td>
            <td>
                <span class=css::category style=category_color.clone()>{category_label.clone()}</span>
            </td>
            <td>
                <div>{format_date(&file.created_at)}</div>
                <UserLine user=file.created_by.clone() />
            </td>
            <td>
                <div>{format_date(&file.last_modified)}</div>
                <UserLine user=file.modified_by.clone() />
            </td>
            <td>
                <span class=css::status style=format!("background-color: {}", status.color())>
                    {status.label()}
                </span>
            </td>
            <td>
                <div class=css::flags>
                    <span class=css::flag style=category_color title=category_label>
                        <Icon icon=ic::FLAG />
                    </span>
                    <button
                        class=css::iconButton
                        on:click=toggle_favorite
                        aria-pressed=favorite.to_string()
                        title=favorite_title
                    >
                        <Icon icon=favorite_icon />
                    </button>
                    <button
                        class=css::iconButton
                        on:click=toggle_pinned
                        aria-pressed=pinned.to_string()
                        title=pin_title
                    >
                        <Icon icon=pin_icon />
                    </button>
                </div>
            </td>
            <td class=css::actionsCell>
                <RowMenu file=file />
            </td>
        </tr>
    }
}

/// Avatar (or initial) followed by the user's name.
#[component]
pub fn UserLine(user: UserRef) -> impl IntoView {
    let avatar = match user.avatar.clone() {
        Some(src) => view! { <img class=css::avatar src=src alt="" /> }.into_any(),
        None => view! { <span class=css::avatarInitial>{user.initial()}</span> }.into_any(),
    };
    view! {
        <div class=css::userLine>
            {avatar}
            <span class=css::fileMeta>{user.name}</span>
        </div>
    }
}

/// Per-row actions menu.
#[component]
fn RowMenu(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (open, set_open) = signal(false);
    let file = StoredValue::new(file);

    // Close the menu, then run the action on this row's file.
    let act = move |action: fn(&AppContext, FileRecord)| {
        move |_: MouseEvent| {
            set_open.set(false);
            action(&ctx, file.get_value());
        }
    };

    view! {
        <div class=css::menuWrap>
            <button
                class=css::iconButton
                aria-label="Actions"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <Icon icon=ic::MORE />
            </button>
            <Show when=move || open.get()>
                <div class=css::menu role="menu" on:mouseleave=move |_| set_open.set(false)>
                    <button class=css::menuItem role="menuitem" on:click=act(AppContext::open_details)>
                        <Icon icon=ic::EYE />
                        "View details"
                    </button>
                    <button class=css::menuItem role="menuitem" on:click=act(AppContext::preview)>
                        <Icon icon=ic::EXTERNAL_LINK />
                        "Preview"
                    </button>
                    <button class=css::menuItem role="menuitem" on:click=act(AppContext::open_share_link)>
                        <Icon icon=ic::LINK />
                        "Share link"
                    </button>
                    <button class=css::menuItem role="menuitem" on:click=act(AppContext::open_access)>
                        <Icon icon=ic::PEOPLE />
                        "Manage access"
                    </button>
                    <button class=css::menuItem role="menuitem" on:click=act(AppContext::download)>
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </button>
                </div>
            </Show>
        </div>
    }
}
