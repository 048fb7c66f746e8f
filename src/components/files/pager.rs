//! Pager: rows-per-page selector, range label and page buttons.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PAGE_SIZE_OPTIONS;
use crate::core::page_count;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

/// "first–last of total" for the current page.
fn range_label(page: usize, page_size: usize, total: usize) -> String {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    if page == 0 || page_size == 0 || offset >= total {
        return format!("0 of {total}");
    }
    let first = offset + 1;
    let last = offset.saturating_add(page_size).min(total);
    format!("{first}–{last} of {total}")
}

#[component]
pub fn Pager(#[prop(into)] total: Signal<usize>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let listing = ctx.listing;
    let page = listing.page;

    let pages = Memo::new(move |_| page_count(total.get(), listing.page_size.get()));
    let range = move || range_label(page.get(), listing.page_size.get(), total.get());

    view! {
        <nav class=css::pager aria-label="Pagination">
            <label class=css::pageSize>
                "Rows per page"
                <select
                    class=css::select
                    prop:value=move || listing.page_size.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            listing.set_page_size(size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>

            <span class=css::range>{range}</span>

            <div class=css::pages>
                <button
                    class=css::iconButton
                    aria-label="Previous page"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                {move || {
                    (1..=pages.get())
                        .map(|n| {
                            let class = move || {
                                if page.get() == n {
                                    format!("{} {}", css::pageButton, css::pageActive)
                                } else {
                                    css::pageButton.to_string()
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    aria-current=move || (page.get() == n).then_some("page")
                                    on:click=move |_| page.set(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class=css::iconButton
                    aria-label="Next page"
                    disabled=move || page.get() >= pages.get()
                    on:click=move |_| page.update(|p| *p = (*p + 1).min(pages.get_untracked()))
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(1, 7, 7), "1–7 of 7");
        assert_eq!(range_label(2, 10, 12), "11–12 of 12");
        assert_eq!(range_label(1, 25, 0), "0 of 0");
    }

    #[test]
    fn test_range_label_past_last_page() {
        assert_eq!(range_label(3, 7, 12), "0 of 12");
        assert_eq!(range_label(0, 7, 12), "0 of 12");
        assert_eq!(range_label(1, 0, 12), "0 of 12");
        assert_eq!(range_label(2, 7, 12), "8–12 of 12");
    }
}
