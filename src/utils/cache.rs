//! Session-scoped storage for listing preferences.
//!
//! Uses sessionStorage, so preferences survive reloads within a tab and are
//! dropped when the tab is closed.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;
use crate::config::{DEFAULT_PAGE_SIZE, cache::VIEW_PREFS_KEY};
use crate::models::{SortKey, SortOrder};

/// Cache operation errors.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// sessionStorage not available.
    #[error("sessionStorage unavailable")]
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize cache entry")]
    SerializationFailed,
    /// Failed to write to storage.
    #[error("failed to write cache entry")]
    WriteFailed,
}

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::SerializationFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Listing preferences kept for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPrefs {
    pub page_size: usize,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl Default for ViewPrefs {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: Some(SortKey::Name),
            sort_order: SortOrder::Asc,
        }
    }
}

impl ViewPrefs {
    /// Stored preferences, or defaults when none are stored.
    pub fn load() -> Self {
        get(VIEW_PREFS_KEY)
            .filter(|p: &Self| p.page_size > 0)
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = set(VIEW_PREFS_KEY, self) {
            tracing::warn!(error = %e, "listing preferences not saved");
        }
    }
}
