//! Permission resource.

use serde::{Deserialize, Serialize};

/// A permission granting a user, group, domain, or anyone access to a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Additional roles, e.g. `commenter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_roles: Option<Vec<String>>,

    /// Authentication key usable on link-shared items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key: Option<String>,

    /// ETag of the permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Permission id. Assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the grantee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Photo link of the grantee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_link: Option<String>,

    /// Primary role: `owner`, `writer`, or `reader`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Link back to this permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Grantee type: `user`, `group`, `domain`, or `anyone`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<String>,

    /// Email address or domain name the permission refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the link is required for this permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_link: Option<bool>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A list of permissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The permissions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Permission>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}
