use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Labels
// =============================================================================

open_label! {
    /// Department a file belongs to. Drives the colour of the category flag.
    pub enum Category {
        Ordering => "Ordering",
        Production => "Production",
        Bookkeeping => "Bookkeeping",
        Personnel => "Personnel",
        Administration => "Administration",
        Tasks => "Tasks",
    }
}

impl Category {
    /// Categories offered by the category filter.
    pub const KNOWN: [Category; 6] = [
        Category::Ordering,
        Category::Production,
        Category::Bookkeeping,
        Category::Personnel,
        Category::Administration,
        Category::Tasks,
    ];

    /// Personnel files never carry linked business resources.
    pub fn is_personnel(&self) -> bool {
        matches!(self, Self::Personnel)
    }

    /// Flag colour for this category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ordering => "#FF4081",
            Self::Production => "#FFA000",
            Self::Bookkeeping => "#4CAF50",
            Self::Personnel => "#2196F3",
            Self::Administration => "#9C27B0",
            Self::Tasks | Self::Other(_) => "#757575",
        }
    }
}

open_label! {
    /// Kind of business record a file is linked to.
    pub enum ResourceKind {
        Order => "ORDER",
        Task => "TASK",
        Project => "PROJECT",
        Customer => "CUSTOMER",
    }
}

/// Lifecycle status of a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    #[default]
    Active,
    Archived,
    Deleted,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Archived => "Archived",
            Self::Deleted => "Deleted",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Active => "#4CAF50",
            Self::Archived => "#FFA000",
            Self::Deleted => "#F44336",
        }
    }
}

// =============================================================================
// File Record
// =============================================================================

/// Reference to a user who created or modified a file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRef {
    /// Avatar fallback letter.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Business records bundled with a file (order, counterparty, delivery).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedRecord {
    pub order_id: String,
    pub order_date: String,
    /// Supplier or customer name.
    pub customer_name: String,
    pub delivery_date: String,
    pub related_resource_name: String,
    pub related_resource_url: String,
}

/// Per-user overlay flags, changed only through the pin/favorite operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTag {
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
}

/// Metadata snapshot of one file in the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Key for UI rows, selection and sharing.
    pub id: String,
    /// Key for content operations (download, preview).
    pub uuid: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Display label of the file type.
    #[serde(rename = "type")]
    pub file_type: String,
    /// MIME-like format string.
    pub format: String,
    pub category: Category,
    #[serde(default)]
    pub status: FileStatus,
    pub created_by: UserRef,
    pub modified_by: UserRef,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    /// Timestamp used for sorting and display.
    pub last_modified: DateTime<Utc>,
    /// Relationship scopes allowed to see the file (display only).
    #[serde(default)]
    pub access_level: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_resources: Option<LinkedRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tag: Option<CustomTag>,
}

impl FileRecord {
    pub fn is_favorite(&self) -> bool {
        self.custom_tag.as_ref().is_some_and(|t| t.favorite)
    }

    pub fn is_pinned(&self) -> bool {
        self.custom_tag.as_ref().is_some_and(|t| t.pinned)
    }

    /// Status shown in the listing: the user overlay wins over the file status.
    pub fn display_status(&self) -> FileStatus {
        self.custom_tag
            .as_ref()
            .and_then(|t| t.status)
            .unwrap_or(self.status)
    }
}

/// Business resource linked to a file, fetched on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedResource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "id": "9",
        "uuid": "uuid-9",
        "name": "Quarterly Plan.pdf",
        "size": 2048,
        "type": "PDF",
        "format": "application/pdf",
        "category": "Warehouse",
        "status": "archived",
        "createdBy": { "name": "alice" },
        "modifiedBy": { "name": "Bob", "avatar": "/avatars/bob.png" },
        "createdAt": "2024-01-02T08:00:00Z",
        "modifiedAt": "2024-01-03T08:00:00Z",
        "lastModified": "2024-01-03T08:00:00Z",
        "accessLevel": ["Order", "Client"],
        "customTag": { "favorite": true, "status": "deleted" }
    }"#;

    #[test]
    fn test_record_wire_shape() {
        let record: FileRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(record.file_type, "PDF");
        assert_eq!(record.category, Category::Other("Warehouse".to_string()));
        assert_eq!(record.status, FileStatus::Archived);
        assert_eq!(record.access_level, vec!["Order", "Client"]);
        assert!(record.linked_resources.is_none());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "Warehouse");
        assert_eq!(json["type"], "PDF");
        assert!(json.get("fileType").is_none());
    }

    #[test]
    fn test_custom_tag_overlay() {
        let record: FileRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert!(record.is_favorite());
        assert!(!record.is_pinned());
        assert_eq!(record.display_status(), FileStatus::Deleted);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from("Personnel"), Category::Personnel);
        assert!(Category::from("Personnel").is_personnel());
        assert_eq!(Category::from("personnel").as_str(), "personnel");
        assert_eq!(String::from(Category::Bookkeeping), "Bookkeeping");
        assert_eq!(Category::Ordering.color(), "#FF4081");
        assert_eq!(Category::from("Misc").color(), "#757575");
    }

    #[test]
    fn test_user_initial() {
        let user = UserRef {
            name: "alice".to_string(),
            avatar: None,
        };
        assert_eq!(user.initial(), "A");
        assert_eq!(UserRef::default().initial(), "");
    }

    #[test]
    fn test_linked_resource_kind() {
        let res: LinkedResource =
            serde_json::from_str(r#"{"id":"1","name":"Order #123","type":"ORDER"}"#).unwrap();
        assert_eq!(res.kind, ResourceKind::Order);
        let other: LinkedResource =
            serde_json::from_str(r#"{"id":"2","name":"Ticket","type":"TICKET"}"#).unwrap();
        assert_eq!(other.kind.as_str(), "TICKET");
    }
}
