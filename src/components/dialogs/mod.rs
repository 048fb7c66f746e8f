//! Per-file dialogs shown over the listing.
//!
//! - [`DetailsDialog`] - Metadata, linked records and linked resources
//! - [`ShareLinkDialog`] - Derived share link with copy to clipboard
//! - [`AccessDialog`] - Per-user share grants

mod access;
mod details;
mod frame;
mod share_link;

use leptos::prelude::*;

pub use access::AccessDialog;
pub use details::DetailsDialog;
pub use share_link::ShareLinkDialog;

use crate::app::AppContext;
use crate::models::ActiveDialog;

/// Renders the open dialog, if any.
#[component]
pub fn DialogHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.dialogs.active.get().map(|dialog| match dialog {
            ActiveDialog::Details(file) => view! { <DetailsDialog file=file /> }.into_any(),
            ActiveDialog::ShareLink(file) => view! { <ShareLinkDialog file=file /> }.into_any(),
            ActiveDialog::Access(file) => view! { <AccessDialog file=file /> }.into_any(),
        })
    }
}
