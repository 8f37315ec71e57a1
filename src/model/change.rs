//! Change resource.

use super::int64;
use crate::model::File;
use serde::{Deserialize, Serialize};

/// An entry in the change log of the user's Drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// Whether the file was deleted. A deleted change carries no `file`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// The changed file, absent when deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Box<File>>,

    /// Id of the changed file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Change id, monotonically increasing.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Link back to this change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A page of changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The changes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Change>,

    /// The largest change id on the user's Drive.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub largest_change_id: Option<i64>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleted_change_has_no_file() {
        let json = r#"{"id":"8997","fileId":"f-1","deleted":true}"#;
        let change: Change = serde_json::from_str(json).unwrap();
        assert_eq!(change.id, Some(8997));
        assert_eq!(change.deleted, Some(true));
        assert!(change.file.is_none());
    }

    #[test]
    fn change_with_file_round_trips() {
        let json = r#"{"id":"9001","fileId":"f-2","file":{"id":"f-2","title":"notes"}}"#;
        let change: Change = serde_json::from_str(json).unwrap();
        assert_eq!(change.file.as_ref().unwrap().title.as_deref(), Some("notes"));

        let back = serde_json::to_value(&change).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }
}
