//! Account information.

use super::GoogleDriveConnector;
use crate::errors::DriveResult;
use crate::model::About;

impl GoogleDriveConnector {
    /// Gets information about the current user along with Drive API
    /// settings: quota, supported import/export formats, upload limits.
    pub async fn about(&self) -> DriveResult<About> {
        self.client()?.get("/about").await
    }
}
