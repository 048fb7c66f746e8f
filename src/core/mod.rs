//! Core logic of the file manager, independent of the browser.
//!
//! This module provides:
//! - [`visible_page`] filtering, sorting and paging of the listing
//! - [`SelectionSet`] row selection and the header checkbox state
//! - [`LoadSlot`] per-dialog fetches with stale-result rejection
//! - [`ShareLinkState`] share-link derivation and copy feedback
//! - [`DirectoryService`] the backend boundary and its implementations

mod collate;
mod dialogs;
pub mod directory;
pub mod error;
mod listing;
mod loading;
mod report;
mod selection;
mod share_link;

pub use dialogs::{begin_access, begin_details};
pub use directory::{DirectoryService, configured_directory};
pub use listing::{VisiblePage, clamp_page, filter_sorted, page_count, visible_page};
pub use loading::{LoadSlot, LoadState, RequestSeq, Ticket};
pub use report::report_failure;
pub use selection::SelectionSet;
pub use share_link::ShareLinkState;
