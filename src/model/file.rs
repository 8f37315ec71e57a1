//! File resource and its nested sub-objects.

use super::{int64, Timestamp};
use crate::model::{Permission, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A file or folder stored in Drive.
///
/// Every field is optional: the service returns partial resources depending
/// on the request, and sparse instances (id plus the changed fields) are the
/// intended input for patch operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Link for opening the file in a Drive web editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_link: Option<String>,

    /// Create time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,

    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short-lived URL for downloading the file's content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Whether the requester can edit the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,

    /// Link for embedding the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_link: Option<String>,

    /// ETag of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Whether the file was explicitly trashed, as opposed to trashed with
    /// a parent folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicitly_trashed: Option<bool>,

    /// Export links, keyed by target MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_links: Option<HashMap<String, String>>,

    /// File extension derived from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,

    /// Size in bytes. Absent for Google Docs formats.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,

    /// Link to the file's icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_link: Option<String>,

    /// File id. Assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Metadata about image media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_media_metadata: Option<ImageMediaMetadata>,

    /// Indexable text attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexable_text: Option<IndexableText>,

    /// Label flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,

    /// The last user to modify the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modifying_user: Option<User>,

    /// Display name of the last modifying user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modifying_user_name: Option<String>,

    /// Last time the requester viewed the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_viewed_by_me_date: Option<Timestamp>,

    /// MD5 checksum of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5_checksum: Option<String>,

    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Last time the requester modified the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by_me_date: Option<Timestamp>,

    /// Last modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<Timestamp>,

    /// Original filename of the uploaded content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,

    /// Display names of the owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_names: Option<Vec<String>>,

    /// The owners.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<User>>,

    /// Folder membership, as a flat list of parent references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<ParentReference>>,

    /// Quota bytes charged for the file.
    #[serde(default, with = "int64", skip_serializing_if = "Option::is_none")]
    pub quota_bytes_used: Option<i64>,

    /// Whether the file is shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// Time the file was shared with the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_with_me_date: Option<Timestamp>,

    /// Thumbnail to use instead of a generated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,

    /// Link to the generated thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,

    /// Title of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The requester's permission on the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_permission: Option<Permission>,

    /// Link for downloading the content in a browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_content_link: Option<String>,

    /// Link for viewing static web assets hosted in the folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_view_link: Option<String>,

    /// Whether writers can share the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writers_can_share: Option<bool>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Label flags on a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    /// Deprecated hidden flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Whether viewers are restricted from downloading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted: Option<bool>,

    /// Whether the file is starred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,

    /// Whether the file is in the trash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trashed: Option<bool>,

    /// Whether the file has been viewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewed: Option<bool>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Indexable text attributes of a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexableText {
    /// The text to index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A thumbnail supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    /// URL-safe base64 encoded image bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// MIME type of the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// EXIF-style metadata for image files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMediaMetadata {
    /// Aperture (f-number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture: Option<f32>,

    /// Camera make.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,

    /// Camera model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,

    /// Color space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,

    /// Date the photo was taken (EXIF format string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Exposure bias in APEX units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_bias: Option<f32>,

    /// Exposure mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_mode: Option<String>,

    /// Exposure time in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<f32>,

    /// Whether the flash fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash_used: Option<bool>,

    /// Focal length in millimeters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f32>,

    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,

    /// ISO speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_speed: Option<i32>,

    /// Lens description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,

    /// Geographic location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ImageLocation>,

    /// Smallest f-number at the focal length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_aperture_value: Option<f32>,

    /// Metering mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_mode: Option<String>,

    /// Clockwise rotation applied from the original orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,

    /// Sensor type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,

    /// Subject distance in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_distance: Option<i32>,

    /// White balance mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_balance: Option<String>,

    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Geographic location embedded in image metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLocation {
    /// Altitude in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,

    /// Latitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A reference to one of a file's parent folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    /// Id of the parent folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether the parent is the root folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,

    /// Link to the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_link: Option<String>,

    /// Link back to this reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A reference to a folder's child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildReference {
    /// Id of the child file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to the child file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_link: Option<String>,

    /// Link back to this reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

impl ChildReference {
    /// Creates a reference to the given file.
    pub fn for_file(file_id: impl Into<String>) -> Self {
        Self {
            id: Some(file_id.into()),
            ..Default::default()
        }
    }
}

/// A page of files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<File>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A page of child references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The child references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ChildReference>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Link to the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}
