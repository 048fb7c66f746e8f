//! Open rules for the per-file dialogs.
//!
//! Deciding whether a dialog fetches is kept apart from the components so the
//! Personnel exclusion and the reload-after-mutation flow can be tested
//! without a browser.

use super::loading::{LoadSlot, Ticket};
use crate::models::{FileRecord, LinkedResource, ShareGrant};

/// Open the details slot for `file`.
///
/// Personnel files never fetch linked resources: the slot goes straight to an
/// empty result and `None` is returned. Otherwise the returned ticket must be
/// used to resolve the fetch.
pub fn begin_details(slot: &mut LoadSlot<LinkedResource>, file: &FileRecord) -> Option<Ticket> {
    if file.category.is_personnel() {
        slot.open_resolved(&file.id, Vec::new());
        None
    } else {
        Some(slot.open(&file.id))
    }
}

/// Open the grants slot for `file`. Grants are always fetched.
pub fn begin_access(slot: &mut LoadSlot<ShareGrant>, file: &FileRecord) -> Ticket {
    slot.open(&file.id)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::core::directory::{DirectoryService, FileBlob, FixtureDirectory, ServiceResult};
    use crate::core::loading::LoadState;
    use crate::models::{Category, CreateShareRequest, DirectoryUser};

    /// Fixture directory that counts linked-resource and grant fetches.
    #[derive(Default)]
    struct CountingDirectory {
        inner: Option<FixtureDirectory>,
        linked_calls: AtomicUsize,
        grant_calls: AtomicUsize,
    }

    impl CountingDirectory {
        fn seeded() -> Self {
            Self {
                inner: Some(FixtureDirectory::seeded()),
                ..Self::default()
            }
        }

        fn inner(&self) -> &FixtureDirectory {
            self.inner.as_ref().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl DirectoryService for CountingDirectory {
        fn backend(&self) -> &'static str {
            "counting"
        }

        async fn list_files(&self) -> ServiceResult<Vec<FileRecord>> {
            self.inner().list_files().await
        }

        async fn download(&self, uuid: &str) -> ServiceResult<FileBlob> {
            self.inner().download(uuid).await
        }

        async fn preview(&self, uuid: &str) -> ServiceResult<FileBlob> {
            self.inner().preview(uuid).await
        }

        async fn linked_resources(&self, file: &FileRecord) -> ServiceResult<Vec<LinkedResource>> {
            self.linked_calls.fetch_add(1, Ordering::SeqCst);
            self.inner().linked_resources(file).await
        }

        async fn share_grants(&self, file_id: &str) -> ServiceResult<Vec<ShareGrant>> {
            self.grant_calls.fetch_add(1, Ordering::SeqCst);
            self.inner().share_grants(file_id).await
        }

        async fn create_share(
            &self,
            file_id: &str,
            request: CreateShareRequest,
        ) -> ServiceResult<()> {
            self.inner().create_share(file_id, request).await
        }

        async fn remove_share(&self, file_id: &str, share_id: &str) -> ServiceResult<()> {
            self.inner().remove_share(file_id, share_id).await
        }

        async fn pin(&self, file_id: &str) -> ServiceResult<()> {
            self.inner().pin(file_id).await
        }

        async fn unpin(&self, file_id: &str) -> ServiceResult<()> {
            self.inner().unpin(file_id).await
        }

        async fn favorite(&self, file_id: &str) -> ServiceResult<()> {
            self.inner().favorite(file_id).await
        }

        async fn unfavorite(&self, file_id: &str) -> ServiceResult<()> {
            self.inner().unfavorite(file_id).await
        }

        async fn list_users(&self) -> ServiceResult<Vec<DirectoryUser>> {
            self.inner().list_users().await
        }
    }

    /// What the details dialog does on open: fetch only when a ticket is issued.
    async fn open_details(
        dir: &CountingDirectory,
        slot: &mut LoadSlot<LinkedResource>,
        file: &FileRecord,
    ) {
        if let Some(ticket) = begin_details(slot, file) {
            let result = dir.linked_resources(file).await;
            slot.resolve(ticket, result);
        }
    }

    #[tokio::test]
    async fn test_personnel_details_issue_no_fetch() {
        let dir = CountingDirectory::seeded();
        let files = dir.list_files().await.unwrap();
        let mut slot = LoadSlot::default();

        for file in files.iter().filter(|f| f.category == Category::Personnel) {
            open_details(&dir, &mut slot, file).await;
            assert_eq!(
                slot.state(),
                &LoadState::Loaded {
                    file_id: file.id.clone(),
                    items: vec![],
                }
            );
        }
        assert_eq!(dir.linked_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_other_details_fetch_once() {
        let dir = CountingDirectory::seeded();
        let files = dir.list_files().await.unwrap();
        let invoice = files.iter().find(|f| f.id == "1").unwrap();
        let mut slot = LoadSlot::default();

        open_details(&dir, &mut slot, invoice).await;
        assert_eq!(dir.linked_calls.load(Ordering::SeqCst), 1);
        assert!(matches!(slot.state(), LoadState::Loaded { items, .. } if items.len() == 2));
    }

    #[tokio::test]
    async fn test_grant_removal_then_reload() {
        let dir = CountingDirectory::seeded();
        let files = dir.list_files().await.unwrap();
        let invoice = files.iter().find(|f| f.id == "1").unwrap();
        let mut slot = LoadSlot::default();

        let ticket = begin_access(&mut slot, invoice);
        let grants = dir.share_grants(ticket.file_id()).await;
        assert!(slot.resolve(ticket, grants));

        dir.remove_share("1", "2").await.unwrap();
        let ticket = slot.reload().unwrap();
        let grants = dir.share_grants(ticket.file_id()).await;
        assert!(slot.resolve(ticket, grants));

        assert_eq!(dir.grant_calls.load(Ordering::SeqCst), 2);
        match slot.state() {
            LoadState::Loaded { items, .. } => {
                assert!(items.iter().all(|g| g.id != "2"));
                assert_eq!(items.len(), 1);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_close_during_fetch_discards_result() {
        let dir = CountingDirectory::seeded();
        let files = dir.list_files().await.unwrap();
        let mut slot = LoadSlot::default();

        let ticket = begin_access(&mut slot, &files[0]);
        let pending = dir.share_grants(ticket.file_id()).await;
        slot.close();
        assert!(!slot.resolve(ticket, pending));
        assert_eq!(slot.state(), &LoadState::Closed);
    }
}
