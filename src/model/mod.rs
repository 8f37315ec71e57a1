//! Typed models for Drive API v2 resources.
//!
//! One struct per resource, mirroring the wire representation exactly:
//! `camelCase` field names, every field optional, and a flattened map
//! catching unknown or forward-compatible keys. The structs perform no
//! validation — invalid values propagate to the remote service, which
//! rejects them. Lists of resources are plain `Vec`s; (de)serialization is
//! order-preserving and 1:1, so converting a raw response list into models
//! and back never reorders, drops, or invents elements.

mod about;
mod app;
mod change;
mod comment;
mod file;
mod permission;
mod revision;
mod user;

pub use about::{About, AdditionalRoleInfo, ExportFormat, ImportFormat, MaxUploadSize, RoleSet};
pub use app::{App, AppIcon, AppList};
pub use change::{Change, ChangeList};
pub use comment::{Comment, CommentContext, CommentList, CommentReply, CommentReplyList};
pub use file::{
    ChildList, ChildReference, File, FileList, ImageLocation, ImageMediaMetadata, IndexableText,
    Labels, ParentReference, Thumbnail,
};
pub use permission::{Permission, PermissionList};
pub use revision::{Revision, RevisionList};
pub use user::{User, UserPicture};

/// Timestamp as Drive sends it: RFC 3339 with the original offset preserved.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Serde adapter for 64-bit integers, which Drive encodes as decimal
/// strings on the wire (plain numbers are also accepted when reading).
pub(crate) mod int64 {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(n)) => Ok(Some(n)),
            Some(Repr::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
        value: Option<i64>,
    }

    #[test]
    fn int64_reads_string_and_number_forms() {
        let s: Sample = serde_json::from_str(r#"{"value":"9007199254740993"}"#).unwrap();
        assert_eq!(s.value, Some(9007199254740993));

        let s: Sample = serde_json::from_str(r#"{"value":42}"#).unwrap();
        assert_eq!(s.value, Some(42));

        let s: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(s.value, None);
    }

    #[test]
    fn int64_writes_string_form() {
        let json = serde_json::to_string(&Sample { value: Some(1024) }).unwrap();
        assert_eq!(json, r#"{"value":"1024"}"#);

        let json = serde_json::to_string(&Sample { value: None }).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn timestamp_preserves_offset() {
        let ts: Timestamp = "2013-02-14T13:46:19.123+05:30".parse().unwrap();
        assert_eq!(ts.to_rfc3339(), "2013-02-14T13:46:19.123+05:30");
    }
}
