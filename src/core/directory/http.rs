//! REST client for a remote file directory.

use async_trait::async_trait;
use urlencoding::encode;

use super::{DirectoryService, FileBlob, ServiceResult};
use crate::core::error::ServiceError;
use crate::models::{CreateShareRequest, DirectoryUser, FileRecord, LinkedResource, ShareGrant};
use crate::utils::fetch::{self, Method};

/// Directory served over HTTP under `base_url`.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    base_url: String,
}

impl HttpDirectory {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.base_url)
    }

    fn file_url(&self, id: &str, tail: &str) -> String {
        format!("{}/files/{}/{}", self.base_url, encode(id), tail)
    }

    async fn blob(&self, operation: &'static str, url: String) -> ServiceResult<FileBlob> {
        let (bytes, mime) = fetch::fetch_bytes(&url)
            .await
            .map_err(|e| ServiceError::transport(operation, e))?;
        Ok(FileBlob { bytes, mime })
    }

    async fn toggle(
        &self,
        operation: &'static str,
        method: Method,
        file_id: &str,
        flag: &str,
    ) -> ServiceResult<()> {
        fetch::send(method, &self.file_url(file_id, flag))
            .await
            .map_err(|e| ServiceError::transport(operation, e))
    }
}

#[async_trait(?Send)]
impl DirectoryService for HttpDirectory {
    fn backend(&self) -> &'static str {
        "http"
    }

    async fn list_files(&self) -> ServiceResult<Vec<FileRecord>> {
        fetch::fetch_json(&self.files_url())
            .await
            .map_err(|e| ServiceError::transport("list files", e))
    }

    async fn download(&self, uuid: &str) -> ServiceResult<FileBlob> {
        self.blob("download", self.file_url(uuid, "download")).await
    }

    async fn preview(&self, uuid: &str) -> ServiceResult<FileBlob> {
        self.blob("preview", self.file_url(uuid, "preview")).await
    }

    async fn linked_resources(&self, file: &FileRecord) -> ServiceResult<Vec<LinkedResource>> {
        if file.category.is_personnel() {
            return Ok(Vec::new());
        }
        fetch::fetch_json(&self.file_url(&file.id, "linked-resources"))
            .await
            .map_err(|e| ServiceError::transport("load linked resources", e))
    }

    async fn share_grants(&self, file_id: &str) -> ServiceResult<Vec<ShareGrant>> {
        fetch::fetch_json(&self.file_url(file_id, "shares"))
            .await
            .map_err(|e| ServiceError::transport("load shares", e))
    }

    async fn create_share(&self, file_id: &str, request: CreateShareRequest) -> ServiceResult<()> {
        fetch::send_json(Method::Post, &self.file_url(file_id, "shares"), &request)
            .await
            .map_err(|e| ServiceError::transport("share", e))
    }

    async fn remove_share(&self, file_id: &str, share_id: &str) -> ServiceResult<()> {
        let url = self.file_url(file_id, &format!("shares/{}", encode(share_id)));
        fetch::send(Method::Delete, &url)
            .await
            .map_err(|e| ServiceError::transport("remove share", e))
    }

    async fn pin(&self, file_id: &str) -> ServiceResult<()> {
        self.toggle("pin", Method::Put, file_id, "pin").await
    }

    async fn unpin(&self, file_id: &str) -> ServiceResult<()> {
        self.toggle("unpin", Method::Delete, file_id, "pin").await
    }

    async fn favorite(&self, file_id: &str) -> ServiceResult<()> {
        self.toggle("favorite", Method::Put, file_id, "favorite").await
    }

    async fn unfavorite(&self, file_id: &str) -> ServiceResult<()> {
        self.toggle("unfavorite", Method::Delete, file_id, "favorite")
            .await
    }

    async fn list_users(&self) -> ServiceResult<Vec<DirectoryUser>> {
        fetch::fetch_json(&format!("{}/users", self.base_url))
            .await
            .map_err(|e| ServiceError::transport("list users", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let dir = HttpDirectory::new("https://api.test/v1/");
        assert_eq!(dir.files_url(), "https://api.test/v1/files");
        assert_eq!(
            dir.file_url("uuid 1", "download"),
            "https://api.test/v1/files/uuid%201/download"
        );
        assert_eq!(dir.file_url("7", "pin"), "https://api.test/v1/files/7/pin");
    }
}
