//! About resource: account and service capability metadata.

use super::int64;
use crate::model::User;
use serde::{Deserialize, Serialize};

/// Information about the current user and the service's capabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    /// Additional roles available per primary role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_role_info: Option<Vec<AdditionalRoleInfo>>,

    /// The domain sharing policy for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_sharing_policy: Option<String>,

    /// ETag of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Supported export conversions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_formats: Option<Vec<ExportFormat>>,

    /// Supported import conversions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_formats: Option<Vec<ImportFormat>>,

    /// Whether the requesting app is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current_app_installed: Option<bool>,

    /// The largest change id on the user's Drive.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub largest_change_id: Option<i64>,

    /// Upload size limits per file type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_upload_sizes: Option<Vec<MaxUploadSize>>,

    /// Display name of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The user's permission id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<String>,

    /// Total quota in bytes.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub quota_bytes_total: Option<i64>,

    /// Quota bytes used by Drive.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub quota_bytes_used: Option<i64>,

    /// Quota bytes used across all Google services.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub quota_bytes_used_aggregate: Option<i64>,

    /// Quota bytes used by trashed items.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub quota_bytes_used_in_trash: Option<i64>,

    /// Number of remaining change ids.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub remaining_change_ids: Option<i64>,

    /// Id of the root folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_folder_id: Option<String>,

    /// The authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Link back to this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Additional roles available for a primary role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalRoleInfo {
    /// Supported role sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_sets: Option<Vec<RoleSet>>,

    /// Content type the roles apply to.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub info_type: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Additional roles compatible with a primary role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSet {
    /// The additional roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_roles: Option<Vec<String>>,

    /// The primary role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_role: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A supported export conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFormat {
    /// Source content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Possible target MIME types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A supported import conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFormat {
    /// Source MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Possible target content types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Upload size limit for a file type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxUploadSize {
    /// Maximum size in bytes.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// The file type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub upload_type: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}
