//! Folder membership operations, via the children collection.

use super::{require_id, GoogleDriveConnector, ROOT_FOLDER};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{ChildList, ChildReference};
use crate::pagination::{save_page_token, ExecutionContext, NEXT_PAGE_TOKEN};
use serde::Serialize;

/// Parameters for listing the files in a folder.
#[derive(Debug, Clone)]
pub struct ListChildrenParams {
    /// Maximum number of children per page.
    pub max_results: u32,
    /// Query string for searching children.
    pub query: Option<String>,
}

impl Default for ListChildrenParams {
    fn default() -> Self {
        Self {
            max_results: 100,
            query: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListChildrenQuery<'a> {
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

impl GoogleDriveConnector {
    /// Inserts a file into a folder. `None` targets the root folder.
    pub async fn insert_file_in_folder(
        &self,
        file_id: &str,
        folder_id: Option<&str>,
    ) -> DriveResult<()> {
        require_id("file id", file_id)?;
        let folder = folder_id.unwrap_or(ROOT_FOLDER);
        let path = format!("/files/{}/children", encode_path(folder));

        let _: ChildReference = self
            .client()?
            .post(&path, &ChildReference::for_file(file_id))
            .await?;
        Ok(())
    }

    /// Removes a file from a folder. `None` targets the root folder.
    ///
    /// The deletion addresses the raw (folder id, file id) pair directly;
    /// no reference object is involved.
    pub async fn delete_file_from_folder(
        &self,
        file_id: &str,
        folder_id: Option<&str>,
    ) -> DriveResult<()> {
        require_id("file id", file_id)?;
        let folder = folder_id.unwrap_or(ROOT_FOLDER);
        let path = format!(
            "/files/{}/children/{}",
            encode_path(folder),
            encode_path(file_id)
        );
        self.client()?.delete(&path).await
    }

    /// Returns the ids of the files under the given folder. `None` targets
    /// the root folder.
    ///
    /// When the folder has children, the next-page token is stored in `ctx`
    /// as a side effect; an empty folder returns an empty list without
    /// writing anything to the context.
    pub async fn list_files_in_folder(
        &self,
        ctx: &ExecutionContext,
        folder_id: Option<&str>,
        params: &ListChildrenParams,
    ) -> DriveResult<Vec<String>> {
        let folder = folder_id.unwrap_or(ROOT_FOLDER);
        let path = format!("/files/{}/children", encode_path(folder));

        let query = ListChildrenQuery {
            max_results: params.max_results,
            q: params.query.as_deref(),
        };

        let list: ChildList = self.client()?.get_with_params(&path, &query).await?;

        if list.items.is_empty() {
            return Ok(Vec::new());
        }

        save_page_token(ctx, NEXT_PAGE_TOKEN, list.next_page_token.as_deref());
        Ok(list.items.into_iter().filter_map(|child| child.id).collect())
    }
}
