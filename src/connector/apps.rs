//! Installed-app operations.

use super::{require_id, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{App, AppList};

impl GoogleDriveConnector {
    /// Lists the user's installed apps.
    pub async fn list_apps(&self) -> DriveResult<Vec<App>> {
        let list: AppList = self.client()?.get("/apps").await?;
        Ok(list.items)
    }

    /// Gets a specific app installed in the user's account.
    pub async fn get_app(&self, app_id: &str) -> DriveResult<App> {
        require_id("app id", app_id)?;
        let path = format!("/apps/{}", encode_path(app_id));
        self.client()?.get(&path).await
    }
}
