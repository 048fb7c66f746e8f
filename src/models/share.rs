//! Sharing types: per-user grants and link access.

use serde::{Deserialize, Serialize};

open_label! {
    /// Permission carried by a share grant.
    pub enum SharePermission {
        Read => "READ",
        Write => "WRITE",
    }
}

impl Default for SharePermission {
    fn default() -> Self {
        Self::Read
    }
}

impl SharePermission {
    /// Permissions offered when creating a grant.
    pub const CHOICES: [SharePermission; 2] = [SharePermission::Read, SharePermission::Write];
}

/// Access granted to one user on one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareGrant {
    /// Server-assigned grant id.
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub permission: SharePermission,
}

/// Grant creation payload; the id is assigned by the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub permission: SharePermission,
}

impl CreateShareRequest {
    pub fn into_grant(self, id: String) -> ShareGrant {
        ShareGrant {
            id,
            user_id: self.user_id,
            user_name: self.user_name,
            permission: self.permission,
        }
    }
}

/// A user who can receive a share grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
}

/// Who may follow a share link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkAccess {
    /// Anyone with the link.
    #[default]
    Public,
    /// Only signed-in users.
    RequireLogin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_to_read() {
        let req: CreateShareRequest =
            serde_json::from_str(r#"{"userId":"user1","userName":"John Doe"}"#).unwrap();
        assert_eq!(req.permission, SharePermission::Read);

        let grant = req.into_grant("7".to_string());
        assert_eq!(grant.id, "7");
        assert_eq!(grant.user_name, "John Doe");
    }

    #[test]
    fn test_permission_wire_labels() {
        let grant: ShareGrant = serde_json::from_str(
            r#"{"id":"1","userId":"u","userName":"U","permission":"WRITE"}"#,
        )
        .unwrap();
        assert_eq!(grant.permission, SharePermission::Write);
        assert_eq!(SharePermission::from("ADMIN").as_str(), "ADMIN");
    }
}
