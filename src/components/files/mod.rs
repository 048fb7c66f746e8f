//! File listing UI components.
//!
//! Components:
//! - [`FileManager`] - Page layout, notice bar and first load
//! - [`Toolbar`] - Search, category filter and ordering
//! - [`BulkBar`] - Actions on the selected rows
//! - [`FileTable`] - Rows with selection, flags and the row menu
//! - [`Pager`] - Rows per page and page buttons

mod bulk_bar;
mod manager;
mod pager;
mod table;
mod toolbar;

pub use bulk_bar::BulkBar;
pub use manager::FileManager;
pub use pager::Pager;
pub use table::{FileTable, UserLine};
pub use toolbar::Toolbar;
