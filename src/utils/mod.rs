//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch`] - Network fetching with timeout
//! - [`dom`] - Clipboard, blob download and preview, storage access
//! - [`format_size`], [`format_date`] - Display formatting
//! - [`ViewPrefs`] - Session-persisted listing preferences

pub mod cache;
pub mod dom;
pub mod fetch;
mod format;
pub mod logging;

pub use cache::ViewPrefs;
pub use format::{format_date, format_size};
