//! In-memory directory seeded from bundled fixtures.
//!
//! Mutations change the in-memory data, so a re-fetch after pin, favorite,
//! share or unshare observes them the same way it would against a server.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::Deserialize;

use super::{DirectoryService, FileBlob, ServiceResult};
use crate::core::error::ServiceError;
use crate::models::{
    CreateShareRequest, CustomTag, DirectoryUser, FileRecord, LinkedResource, ShareGrant,
};

const FIXTURE_JSON: &str = include_str!("../../../assets/fixtures/directory.json");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureData {
    files: Vec<FileRecord>,
    #[serde(default)]
    linked_resources: HashMap<String, Vec<LinkedResource>>,
    #[serde(default)]
    shares: HashMap<String, Vec<ShareGrant>>,
    #[serde(default)]
    users: Vec<DirectoryUser>,
}

#[derive(Debug)]
struct Store {
    data: FixtureData,
    next_share_id: u64,
}

impl Store {
    fn file_mut(&mut self, file_id: &str) -> ServiceResult<&mut FileRecord> {
        self.data
            .files
            .iter_mut()
            .find(|f| f.id == file_id)
            .ok_or_else(|| ServiceError::UnknownFile(file_id.to_string()))
    }

    fn tag_mut(&mut self, file_id: &str) -> ServiceResult<&mut CustomTag> {
        Ok(self
            .file_mut(file_id)?
            .custom_tag
            .get_or_insert_with(CustomTag::default))
    }

    fn file_by_uuid(&self, uuid: &str) -> ServiceResult<&FileRecord> {
        self.data
            .files
            .iter()
            .find(|f| f.uuid == uuid)
            .ok_or_else(|| ServiceError::UnknownFile(uuid.to_string()))
    }

    fn ensure_file(&self, file_id: &str) -> ServiceResult<()> {
        if self.data.files.iter().any(|f| f.id == file_id) {
            Ok(())
        } else {
            Err(ServiceError::UnknownFile(file_id.to_string()))
        }
    }
}

#[derive(Debug)]
pub struct FixtureDirectory {
    store: Mutex<Store>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    latency_ms: u32,
}

impl FixtureDirectory {
    /// Directory holding the bundled fixture data.
    pub fn seeded() -> Self {
        let data = serde_json::from_str(FIXTURE_JSON).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled fixtures are invalid, starting empty");
            FixtureData::default()
        });
        Self::from_data(data)
    }

    fn from_data(data: FixtureData) -> Self {
        let highest_share = data
            .shares
            .values()
            .flatten()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            store: Mutex::new(Store {
                data,
                next_share_id: highest_share + 1,
            }),
            latency_ms: 0,
        }
    }

    /// Delay every call by `ms` in the browser, to exercise loading states.
    pub fn with_latency(mut self, ms: u32) -> Self {
        self.latency_ms = ms;
        self
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<FileRecord> {
        self.lock().data.files.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(target_arch = "wasm32")]
    async fn settle(&self) {
        if self.latency_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn settle(&self) {}

    fn set_flag(&self, file_id: &str, apply: impl FnOnce(&mut CustomTag)) -> ServiceResult<()> {
        let mut store = self.lock();
        apply(store.tag_mut(file_id)?);
        Ok(())
    }
}

#[async_trait(?Send)]
impl DirectoryService for FixtureDirectory {
    fn backend(&self) -> &'static str {
        "fixture"
    }

    async fn list_files(&self) -> ServiceResult<Vec<FileRecord>> {
        self.settle().await;
        Ok(self.lock().data.files.clone())
    }

    async fn download(&self, uuid: &str) -> ServiceResult<FileBlob> {
        self.settle().await;
        let store = self.lock();
        let file = store.file_by_uuid(uuid)?;
        Ok(FileBlob {
            bytes: format!("Dummy file content for {}", file.name).into_bytes(),
            mime: "text/plain".to_string(),
        })
    }

    async fn preview(&self, uuid: &str) -> ServiceResult<FileBlob> {
        self.settle().await;
        let store = self.lock();
        let file = store.file_by_uuid(uuid)?;
        Ok(FileBlob {
            bytes: format!("Dummy preview content for {}", file.name).into_bytes(),
            mime: "text/plain".to_string(),
        })
    }

    async fn linked_resources(&self, file: &FileRecord) -> ServiceResult<Vec<LinkedResource>> {
        self.settle().await;
        if file.category.is_personnel() {
            return Ok(Vec::new());
        }
        let store = self.lock();
        store.ensure_file(&file.id)?;
        Ok(store
            .data
            .linked_resources
            .get(&file.id)
            .cloned()
            .unwrap_or_default())
    }

    async fn share_grants(&self, file_id: &str) -> ServiceResult<Vec<ShareGrant>> {
        self.settle().await;
        let store = self.lock();
        store.ensure_file(file_id)?;
        Ok(store.data.shares.get(file_id).cloned().unwrap_or_default())
    }

    async fn create_share(&self, file_id: &str, request: CreateShareRequest) -> ServiceResult<()> {
        self.settle().await;
        let mut store = self.lock();
        store.ensure_file(file_id)?;
        let id = store.next_share_id.to_string();
        store.next_share_id += 1;
        tracing::debug!(file_id, share_id = %id, user = %request.user_id, "fixture share created");
        store
            .data
            .shares
            .entry(file_id.to_string())
            .or_default()
            .push(request.into_grant(id));
        Ok(())
    }

    async fn remove_share(&self, file_id: &str, share_id: &str) -> ServiceResult<()> {
        self.settle().await;
        let mut store = self.lock();
        store.ensure_file(file_id)?;
        let unknown = || ServiceError::UnknownShare {
            file_id: file_id.to_string(),
            share_id: share_id.to_string(),
        };
        let grants = store.data.shares.get_mut(file_id).ok_or_else(unknown)?;
        let index = grants
            .iter()
            .position(|g| g.id == share_id)
            .ok_or_else(unknown)?;
        grants.remove(index);
        Ok(())
    }

    async fn pin(&self, file_id: &str) -> ServiceResult<()> {
        self.settle().await;
        self.set_flag(file_id, |tag| tag.pinned = true)
    }

    async fn unpin(&self, file_id: &str) -> ServiceResult<()> {
        self.settle().await;
        self.set_flag(file_id, |tag| tag.pinned = false)
    }

    async fn favorite(&self, file_id: &str) -> ServiceResult<()> {
        self.settle().await;
        self.set_flag(file_id, |tag| tag.favorite = true)
    }

    async fn unfavorite(&self, file_id: &str) -> ServiceResult<()> {
        self.settle().await;
        self.set_flag(file_id, |tag| tag.favorite = false)
    }

    async fn list_users(&self) -> ServiceResult<Vec<DirectoryUser>> {
        self.settle().await;
        Ok(self.lock().data.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, SharePermission};

    fn file(dir: &FixtureDirectory, id: &str) -> FileRecord {
        dir.snapshot().into_iter().find(|f| f.id == id).unwrap()
    }

    #[test]
    fn test_seeded_fixtures() {
        let dir = FixtureDirectory::seeded();
        let files = dir.snapshot();
        assert_eq!(files.len(), 7);

        let personnel: Vec<&str> = files
            .iter()
            .filter(|f| f.category == Category::Personnel)
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(personnel, vec!["Employee_Records.xlsx", "Annual_Report.pdf"]);
        assert!(
            files
                .iter()
                .filter(|f| f.category.is_personnel())
                .all(|f| f.linked_resources.is_none())
        );
    }

    #[test]
    fn test_ids_and_uuids_unique() {
        let files = FixtureDirectory::seeded().snapshot();
        let mut ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        let mut uuids: Vec<&str> = files.iter().map(|f| f.uuid.as_str()).collect();
        ids.sort();
        ids.dedup();
        uuids.sort();
        uuids.dedup();
        assert_eq!(ids.len(), files.len());
        assert_eq!(uuids.len(), files.len());
    }

    #[tokio::test]
    async fn test_list_users() {
        let users = FixtureDirectory::seeded().list_users().await.unwrap();
        assert_eq!(users.len(), 6);
        assert_eq!(users[0].id, "user1");
        assert_eq!(users[0].name, "John Doe");
    }

    #[tokio::test]
    async fn test_linked_resources() {
        let dir = FixtureDirectory::seeded();
        let linked = dir.linked_resources(&file(&dir, "1")).await.unwrap();
        assert_eq!(linked.len(), 2);

        let none = dir.linked_resources(&file(&dir, "4")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_remove_share_then_reload() {
        let dir = FixtureDirectory::seeded();
        let before = dir.share_grants("1").await.unwrap();
        assert!(before.iter().any(|g| g.id == "2"));

        dir.remove_share("1", "2").await.unwrap();
        let after = dir.share_grants("1").await.unwrap();
        assert!(after.iter().all(|g| g.id != "2"));
        assert_eq!(after.len(), before.len() - 1);

        let err = dir.remove_share("1", "2").await.unwrap_err();
        assert!(matches!(err, ServiceError::UnknownShare { .. }));
    }

    #[tokio::test]
    async fn test_create_share_assigns_fresh_id() {
        let dir = FixtureDirectory::seeded();
        let request = CreateShareRequest {
            user_id: "user6".to_string(),
            user_name: "David Smith".to_string(),
            permission: SharePermission::default(),
        };
        dir.create_share("3", request).await.unwrap();

        let grants = dir.share_grants("3").await.unwrap();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].id, "6");
        assert_eq!(grants[0].permission, SharePermission::Read);
    }

    #[tokio::test]
    async fn test_favorite_toggle_visible_after_reload() {
        let dir = FixtureDirectory::seeded();
        let before = dir.list_files().await.unwrap();
        let target = before.iter().find(|f| f.id == "1").unwrap();
        assert!(!target.is_favorite());

        dir.set_favorite("1", !target.is_favorite()).await.unwrap();
        let after = dir.list_files().await.unwrap();
        assert!(after.iter().find(|f| f.id == "1").unwrap().is_favorite());

        dir.set_favorite("1", false).await.unwrap();
        assert!(!file(&dir, "1").is_favorite());
    }

    #[tokio::test]
    async fn test_pin_creates_tag() {
        let dir = FixtureDirectory::seeded();
        assert!(file(&dir, "3").custom_tag.is_none());

        dir.set_pinned("3", true).await.unwrap();
        let tagged = file(&dir, "3");
        assert!(tagged.is_pinned());
        assert!(!tagged.is_favorite());
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let dir = FixtureDirectory::seeded();
        assert_eq!(
            dir.pin("404").await.unwrap_err(),
            ServiceError::UnknownFile("404".to_string())
        );
        assert!(dir.download("uuid-404").await.is_err());
        assert!(dir.share_grants("404").await.is_err());
    }

    #[tokio::test]
    async fn test_download_by_uuid() {
        let dir = FixtureDirectory::seeded();
        let blob = dir.download("uuid-2").await.unwrap();
        assert_eq!(blob.mime, "text/plain");
        assert!(String::from_utf8(blob.bytes).unwrap().contains("Purchase Order 1042.pdf"));
    }
}
