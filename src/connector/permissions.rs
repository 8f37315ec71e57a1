//! Permission operations.

use super::{join_fields, require_id, require_present, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{Permission, PermissionList};
use serde::Serialize;

/// Options applied when inserting a permission.
#[derive(Debug, Clone)]
pub struct InsertPermissionParams {
    /// Whether to send notification emails when sharing to users or groups.
    pub send_notification_emails: bool,
    /// Custom message to include in notification emails.
    pub email_message: Option<String>,
}

impl Default for InsertPermissionParams {
    fn default() -> Self {
        Self {
            send_notification_emails: true,
            email_message: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertPermissionQuery<'a> {
    send_notification_emails: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_message: Option<&'a str>,
}

#[derive(Serialize)]
struct FieldsQuery {
    fields: String,
}

impl GoogleDriveConnector {
    /// Lists a file's permissions.
    pub async fn list_permissions(&self, file_id: &str) -> DriveResult<Vec<Permission>> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/permissions", encode_path(file_id));
        let list: PermissionList = self.client()?.get(&path).await?;
        Ok(list.items)
    }

    /// Gets a particular permission from a file.
    pub async fn get_permission(
        &self,
        file_id: &str,
        permission_id: &str,
    ) -> DriveResult<Permission> {
        require_id("file id", file_id)?;
        require_id("permission id", permission_id)?;
        let path = format!(
            "/files/{}/permissions/{}",
            encode_path(file_id),
            encode_path(permission_id)
        );
        self.client()?.get(&path).await
    }

    /// Inserts a permission for a file.
    pub async fn insert_permission(
        &self,
        file_id: &str,
        permission: &Permission,
        params: &InsertPermissionParams,
    ) -> DriveResult<Permission> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/permissions", encode_path(file_id));

        let query = InsertPermissionQuery {
            send_notification_emails: params.send_notification_emails,
            email_message: params.email_message.as_deref(),
        };

        self.client()?
            .post_with_params(&path, &query, permission)
            .await
    }

    /// Replaces a permission with the supplied state.
    pub async fn update_permission(
        &self,
        file_id: &str,
        permission: &Permission,
    ) -> DriveResult<Permission> {
        require_id("file id", file_id)?;
        let id = require_present("permission id", permission.id.as_deref())?;
        let path = format!(
            "/files/{}/permissions/{}",
            encode_path(file_id),
            encode_path(id)
        );
        self.client()?.put(&path, permission).await
    }

    /// Makes a partial update to a permission. Only the fields named in
    /// `fields` are applied; the mask is sent exactly as given, in input
    /// order.
    pub async fn patch_permission(
        &self,
        file_id: &str,
        permission: &Permission,
        fields: &[&str],
    ) -> DriveResult<Permission> {
        require_id("file id", file_id)?;
        let id = require_present("permission id", permission.id.as_deref())?;
        let path = format!(
            "/files/{}/permissions/{}",
            encode_path(file_id),
            encode_path(id)
        );

        let query = FieldsQuery {
            fields: join_fields(fields),
        };

        self.client()?
            .patch_with_params(&path, &query, permission)
            .await
    }

    /// Deletes a permission from a file.
    pub async fn delete_permission(&self, file_id: &str, permission_id: &str) -> DriveResult<()> {
        require_id("file id", file_id)?;
        require_id("permission id", permission_id)?;
        let path = format!(
            "/files/{}/permissions/{}",
            encode_path(file_id),
            encode_path(permission_id)
        );
        self.client()?.delete(&path).await
    }
}
