//! UI components built with Leptos.
//!
//! - [`FileManager`] - Listing page (main entry point)
//! - [`files`] - Toolbar, table, bulk bar and pager
//! - [`dialogs`] - Details, share link and access dialogs
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dialogs;
pub mod files;
pub mod icons;

pub use files::FileManager;
