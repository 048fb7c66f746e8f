//! File directory service: the boundary to whatever stores files and grants.
//!
//! The UI only talks to [`DirectoryService`]. Two implementations exist:
//! - [`FixtureDirectory`] - in-memory data seeded from a bundled JSON file
//! - [`HttpDirectory`] - REST client against `config::API_BASE_URL`

mod fixture;
mod http;

use std::sync::Arc;

use async_trait::async_trait;

pub use fixture::FixtureDirectory;
pub use http::HttpDirectory;

use super::error::ServiceError;
use crate::config::{API_BASE_URL, FIXTURE_LATENCY_MS};
use crate::models::{CreateShareRequest, DirectoryUser, FileRecord, LinkedResource, ShareGrant};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// File content returned by download and preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileBlob {
    pub bytes: Vec<u8>,
    /// MIME type reported for the content.
    pub mime: String,
}

/// Operations the file manager needs from its backend.
///
/// Every call may fail and none is retried. Mutations return nothing; callers
/// re-fetch the affected list to observe the result.
#[async_trait(?Send)]
pub trait DirectoryService: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Full snapshot of the listing.
    async fn list_files(&self) -> ServiceResult<Vec<FileRecord>>;

    /// Content by content uuid.
    async fn download(&self, uuid: &str) -> ServiceResult<FileBlob>;

    /// Preview rendition by content uuid.
    async fn preview(&self, uuid: &str) -> ServiceResult<FileBlob>;

    /// Business resources linked to `file`. Always empty for Personnel files.
    async fn linked_resources(&self, file: &FileRecord) -> ServiceResult<Vec<LinkedResource>>;

    async fn share_grants(&self, file_id: &str) -> ServiceResult<Vec<ShareGrant>>;

    async fn create_share(&self, file_id: &str, request: CreateShareRequest) -> ServiceResult<()>;

    async fn remove_share(&self, file_id: &str, share_id: &str) -> ServiceResult<()>;

    async fn pin(&self, file_id: &str) -> ServiceResult<()>;

    async fn unpin(&self, file_id: &str) -> ServiceResult<()>;

    async fn favorite(&self, file_id: &str) -> ServiceResult<()>;

    async fn unfavorite(&self, file_id: &str) -> ServiceResult<()>;

    /// Users that can receive a share grant.
    async fn list_users(&self) -> ServiceResult<Vec<DirectoryUser>>;

    async fn set_favorite(&self, file_id: &str, favorite: bool) -> ServiceResult<()> {
        if favorite {
            self.favorite(file_id).await
        } else {
            self.unfavorite(file_id).await
        }
    }

    async fn set_pinned(&self, file_id: &str, pinned: bool) -> ServiceResult<()> {
        if pinned {
            self.pin(file_id).await
        } else {
            self.unpin(file_id).await
        }
    }
}

/// Directory selected at build time: HTTP when `FILEDESK_API_URL` was set,
/// bundled fixtures otherwise.
pub fn configured_directory() -> Arc<dyn DirectoryService> {
    match API_BASE_URL {
        Some(base) => Arc::new(HttpDirectory::new(base)),
        None => Arc::new(FixtureDirectory::seeded().with_latency(FIXTURE_LATENCY_MS)),
    }
}
