//! Shareable link derivation and copy feedback state.

use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use regex::Regex;

use super::error::ClipboardError;
use crate::models::LinkAccess;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Build `<base>/<slug>` where the slug is the lower-cased name with every
/// whitespace run replaced by one hyphen. The slug is lossy.
pub fn derive_link(base: &str, file_name: &str) -> String {
    let slug = WHITESPACE_RUN.replace_all(&file_name.to_lowercase(), "-").into_owned();
    format!("{}/{}", base.trim_end_matches('/'), slug)
}

/// Single-holder lock around clipboard writes.
#[derive(Clone, Debug, Default)]
pub struct CopySlot {
    held: Arc<AtomicBool>,
}

impl CopySlot {
    /// Take the slot. Fails with [`ClipboardError::Busy`] while another copy
    /// holds it.
    pub fn acquire(&self) -> Result<CopyGuard, ClipboardError> {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClipboardError::Busy)?;
        Ok(CopyGuard {
            held: Arc::clone(&self.held),
        })
    }

    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// Releases the copy slot when dropped, whatever the write's outcome.
#[derive(Debug)]
pub struct CopyGuard {
    held: Arc<AtomicBool>,
}

impl Drop for CopyGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

/// State behind the share-link dialog.
#[derive(Clone, Debug)]
pub struct ShareLinkState {
    link: String,
    access: LinkAccess,
    copied: bool,
    generation: u64,
    slot: CopySlot,
}

impl ShareLinkState {
    pub fn new(base: &str, file_name: &str) -> Self {
        Self {
            link: derive_link(base, file_name),
            access: LinkAccess::default(),
            copied: false,
            generation: 0,
            slot: CopySlot::default(),
        }
    }

    /// Start over for another file, dropping any hand edit and copy feedback.
    pub fn reopen(&mut self, base: &str, file_name: &str) {
        let slot = self.slot.clone();
        let generation = self.generation;
        *self = Self::new(base, file_name);
        self.slot = slot;
        // Pending expiry timers from the previous file must not match.
        self.generation = generation + 1;
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Hand edit; replaces the derived link for the lifetime of this state.
    pub fn edit(&mut self, text: String) {
        self.link = text;
    }

    pub fn access(&self) -> LinkAccess {
        self.access
    }

    pub fn set_access(&mut self, access: LinkAccess) {
        self.access = access;
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    #[cfg(test)]
    pub fn copy_slot(&self) -> CopySlot {
        self.slot.clone()
    }

    /// Take the copy slot for one clipboard write.
    pub fn begin_copy(&self) -> Result<CopyGuard, ClipboardError> {
        self.slot.acquire()
    }

    /// Record a successful copy. Returns the generation to pass to
    /// [`expire`](Self::expire) once the feedback window ends.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// End the feedback window for `generation`. A newer copy keeps the
    /// flag set. Returns whether the flag was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com/share";

    #[test]
    fn test_derive_link() {
        let link = derive_link(BASE, "Invoice Q1 2024.pdf");
        assert_eq!(link, "https://example.com/share/invoice-q1-2024.pdf");
    }

    #[test]
    fn test_derive_link_collapses_runs() {
        assert_eq!(
            derive_link("https://x.test/s/", "  Meeting \t Notes\n.docx"),
            "https://x.test/s/-meeting-notes-.docx"
        );
        assert_eq!(derive_link(BASE, ""), "https://example.com/share/");
    }

    #[test]
    fn test_edit_overrides_until_new_state() {
        let mut state = ShareLinkState::new(BASE, "Annual Report.pdf");
        state.edit("https://short.test/abc".to_string());
        assert_eq!(state.link(), "https://short.test/abc");

        let reopened = ShareLinkState::new(BASE, "Annual Report.pdf");
        assert_eq!(reopened.link(), "https://example.com/share/annual-report.pdf");
    }

    #[test]
    fn test_reopen_resets_and_outdates_timers() {
        let mut state = ShareLinkState::new(BASE, "Annual Report.pdf");
        state.edit("custom".to_string());
        let pending = state.mark_copied();

        state.reopen(BASE, "Supplier Contract.pdf");
        assert_eq!(state.link(), "https://example.com/share/supplier-contract.pdf");
        assert!(!state.copied());

        let fresh = state.mark_copied();
        assert!(!state.expire(pending));
        assert!(state.copied());
        assert!(state.expire(fresh));
    }

    #[test]
    fn test_copy_slot_is_exclusive_and_released() {
        let state = ShareLinkState::new(BASE, "a");
        let slot = state.copy_slot();
        {
            let _guard = state.begin_copy().unwrap();
            assert!(slot.is_held());
            assert_eq!(state.begin_copy().unwrap_err(), ClipboardError::Busy);
        }
        assert!(!slot.is_held());
        assert!(slot.acquire().is_ok());
    }

    #[test]
    fn test_guard_released_on_failure_path() {
        fn failing_copy(slot: &CopySlot) -> Result<(), ClipboardError> {
            let _guard = slot.acquire()?;
            Err(ClipboardError::WriteRejected("denied".to_string()))
        }

        let state = ShareLinkState::new(BASE, "a");
        let slot = state.copy_slot();
        assert!(failing_copy(&slot).is_err());
        assert!(!slot.is_held());
        assert!(!state.copied());
    }

    #[test]
    fn test_copied_window() {
        let mut state = ShareLinkState::new(BASE, "a");
        let first = state.mark_copied();
        assert!(state.copied());

        // Second copy inside the window: the first timer must not clear it.
        let second = state.mark_copied();
        assert!(!state.expire(first));
        assert!(state.copied());

        assert!(state.expire(second));
        assert!(!state.copied());
        assert!(!state.expire(second));
    }

    #[test]
    fn test_access_mode() {
        let mut state = ShareLinkState::new(BASE, "a");
        assert_eq!(state.access(), LinkAccess::Public);
        state.set_access(LinkAccess::RequireLogin);
        assert_eq!(state.access(), LinkAccess::RequireLogin);
    }
}
