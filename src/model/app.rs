//! App resource.

use serde::{Deserialize, Serialize};

/// An app installed in, or authorized for, the user's Drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Whether the app is authorized to access data on the user's Drive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized: Option<bool>,

    /// The app's icons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<AppIcon>>,

    /// App id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether the app is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed: Option<bool>,

    /// App name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type of object the app creates (e.g. `Chart`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// File extensions the app is registered as primary handler for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_file_extensions: Option<Vec<String>>,

    /// MIME types the app is registered as primary handler for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_mime_types: Option<Vec<String>>,

    /// The app's product listing URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    /// File extensions the app is registered as secondary handler for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_file_extensions: Option<Vec<String>>,

    /// MIME types the app is registered as secondary handler for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_mime_types: Option<Vec<String>>,

    /// Whether the app supports creating new objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_create: Option<bool>,

    /// Whether the app supports importing Google Docs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_import: Option<bool>,

    /// Whether the app is selected as default handler for its types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_by_default: Option<bool>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// An icon published by an app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIcon {
    /// Icon category: `application`, `document`, or `documentShared`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// URL of the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Icon size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// The list of a user's installed apps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppList {
    /// ETag of the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// The apps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<App>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_round_trips() {
        let json = r#"{
            "id": "app-1",
            "name": "Diagram Editor",
            "installed": true,
            "icons": [{"category": "application", "iconUrl": "https://i/x", "size": 16}],
            "primaryMimeTypes": ["application/vnd.diagram"]
        }"#;

        let app: App = serde_json::from_str(json).unwrap();
        assert_eq!(app.name.as_deref(), Some("Diagram Editor"));
        assert_eq!(app.icons.as_ref().unwrap()[0].size, Some(16));

        let back = serde_json::to_value(&app).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }
}
