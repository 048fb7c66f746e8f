//! Row selection for bulk actions.
//!
//! Selection is keyed by file id and is independent of the current filter
//! and page: a row checked on page 2 stays checked while page 1 is shown.

use std::collections::BTreeSet;

use crate::models::HeaderCheck;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly `ids`.
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// True when the selection is exactly the set `ids`.
    pub fn is_all_selected<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let all: BTreeSet<&str> = ids.into_iter().collect();
        all.len() == self.selected.len() && all.iter().all(|id| self.selected.contains(*id))
    }

    /// State of the "select all" checkbox for the listing `ids`.
    pub fn header_state<'a, I>(&self, ids: I) -> HeaderCheck
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.selected.is_empty() {
            HeaderCheck::Unchecked
        } else if self.is_all_selected(ids) {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }

    /// Drop ids that are no longer in the listing. Called after a reload.
    ///
    /// Returns how many ids were removed.
    pub fn prune<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let live: BTreeSet<&str> = ids.into_iter().collect();
        let before = self.selected.len();
        self.selected.retain(|id| live.contains(id.as_str()));
        before - self.selected.len()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
