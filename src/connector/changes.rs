//! Change-log operations.

use super::{require_id, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{Change, ChangeList};
use crate::pagination::{save_page_token, ExecutionContext, NEXT_PAGE_TOKEN};
use serde::Serialize;

/// Parameters for listing changes.
#[derive(Debug, Clone)]
pub struct ListChangesParams {
    /// Whether to include deleted items.
    pub include_deleted: bool,
    /// Whether to include shared and public files the user has opened, in
    /// addition to owned files and files explicitly added to a folder.
    pub include_subscribed: bool,
    /// Maximum number of changes per page.
    pub max_results: u32,
    /// Continuation token; falls back to the one stored in the execution
    /// context when unset.
    pub page_token: Option<String>,
    /// Change id to start listing from.
    pub start_change_id: Option<i64>,
}

impl Default for ListChangesParams {
    fn default() -> Self {
        Self {
            include_deleted: true,
            include_subscribed: true,
            max_results: 100,
            page_token: None,
            start_change_id: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListChangesQuery<'a> {
    include_deleted: bool,
    include_subscribed: bool,
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_change_id: Option<i64>,
}

impl GoogleDriveConnector {
    /// Lists the changes for the user.
    ///
    /// The next-page token is stored in `ctx` as a side effect; when the
    /// response carries none the stored token is cleared.
    pub async fn list_changes(
        &self,
        ctx: &ExecutionContext,
        params: &ListChangesParams,
    ) -> DriveResult<Vec<Change>> {
        let page_token = params.page_token.clone().or_else(|| ctx.page_token());
        let query = ListChangesQuery {
            include_deleted: params.include_deleted,
            include_subscribed: params.include_subscribed,
            max_results: params.max_results,
            page_token: page_token.as_deref(),
            start_change_id: params.start_change_id,
        };

        let response: ChangeList = self.client()?.get_with_params("/changes", &query).await?;

        save_page_token(ctx, NEXT_PAGE_TOKEN, response.next_page_token.as_deref());
        Ok(response.items)
    }

    /// Returns a particular change by its id.
    pub async fn get_change(&self, change_id: &str) -> DriveResult<Change> {
        require_id("change id", change_id)?;
        let path = format!("/changes/{}", encode_path(change_id));
        self.client()?.get(&path).await
    }
}
