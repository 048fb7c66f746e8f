//! View-level state types for the file manager UI.

use super::FileRecord;

/// Dialog currently shown over the listing. At most one is open.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveDialog {
    /// Metadata and linked resources.
    Details(FileRecord),
    /// Shareable link with copy button.
    ShareLink(FileRecord),
    /// Per-user share grants.
    Access(FileRecord),
}

/// Tri-state of the "select all" checkbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderCheck {
    #[default]
    Unchecked,
    Indeterminate,
    Checked,
}

/// Loading state of the file listing itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Ready,
    /// The last reload failed; previously loaded rows stay visible.
    Failed(String),
}
