//! Revision resource.

use super::{int64, Timestamp};
use crate::model::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A revision of a file's content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Short-lived URL for downloading the revision's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// ETag of the revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Export links, keyed by target MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_links: Option<HashMap<String, String>>,

    /// Size of the revision in bytes.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,

    /// Revision id. Assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The last user to modify this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modifying_user: Option<User>,

    /// Display name of the last modifying user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modifying_user_name: Option<String>,

    /// MD5 checksum of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5_checksum: Option<String>,

    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Last modification time of this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<Timestamp>,

    /// Original filename at upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,

    /// Whether the revision is pinned and exempt from automatic purging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,

    /// Whether later revisions are published automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_auto: Option<bool>,

    /// Whether the revision is published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Link to the published revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_link: Option<String>,

    /// Whether the revision is published outside the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_outside_domain: Option<bool>,

    /// Link back to this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A list of revisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The revisions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Revision>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_reads_wire_string() {
        let json = r#"{"id":"rev-1","fileSize":"2048","pinned":true}"#;
        let revision: Revision = serde_json::from_str(json).unwrap();
        assert_eq!(revision.file_size, Some(2048));
        assert_eq!(revision.pinned, Some(true));

        let back = serde_json::to_value(&revision).unwrap();
        assert_eq!(back["fileSize"], "2048");
    }
}
