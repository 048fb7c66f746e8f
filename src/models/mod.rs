//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileRecord`], [`Category`], [`CustomTag`] - File metadata snapshots
//! - [`ShareGrant`], [`CreateShareRequest`] - Per-user sharing
//! - [`FilterSpec`] - Listing search, category and ordering
//! - [`ActiveDialog`], [`HeaderCheck`] - View state

#[macro_use]
mod label;

mod file;
mod filter;
mod share;
mod view;

pub use file::{Category, CustomTag, FileRecord, LinkedRecord, LinkedResource, UserRef};
pub use filter::{FilterSpec, SortKey, SortOrder};
pub use share::{CreateShareRequest, DirectoryUser, LinkAccess, ShareGrant, SharePermission};
pub use view::{ActiveDialog, HeaderCheck, ListStatus};
