//! User sub-resource.

use serde::{Deserialize, Serialize};

/// The user owning, sharing, or editing a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether this user is the authenticated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_authenticated_user: Option<bool>,

    /// The user's permission id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<String>,

    /// The user's profile picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<UserPicture>,

    /// Email address, when visible to the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A user's profile picture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPicture {
    /// URL of the picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}
