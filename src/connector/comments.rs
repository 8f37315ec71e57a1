//! Comment operations.

use super::{join_fields, require_id, require_present, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{Comment, CommentList};
use crate::pagination::{save_page_token, ExecutionContext, NEXT_PAGE_TOKEN};
use serde::Serialize;

/// Parameters for listing comments.
#[derive(Debug, Clone)]
pub struct ListCommentsParams {
    /// Whether deleted comments (with content stripped) are returned.
    pub include_deleted: bool,
    /// Maximum number of discussions per page.
    pub max_results: u32,
    /// Continuation token; falls back to the one stored in the execution
    /// context when unset.
    pub page_token: Option<String>,
    /// Only return discussions updated after this RFC 3339 timestamp.
    pub updated_min: Option<String>,
}

impl Default for ListCommentsParams {
    fn default() -> Self {
        Self {
            include_deleted: false,
            max_results: 100,
            page_token: None,
            updated_min: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetCommentQuery {
    include_deleted: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListCommentsQuery<'a> {
    include_deleted: bool,
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_min: Option<&'a str>,
}

#[derive(Serialize)]
struct FieldsQuery {
    fields: String,
}

impl GoogleDriveConnector {
    /// Gets a comment by id.
    pub async fn get_comment(
        &self,
        file_id: &str,
        comment_id: &str,
        include_deleted: bool,
    ) -> DriveResult<Comment> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let path = format!(
            "/files/{}/comments/{}",
            encode_path(file_id),
            encode_path(comment_id)
        );
        self.client()?
            .get_with_params(&path, &GetCommentQuery { include_deleted })
            .await
    }

    /// Lists all comments for a file.
    ///
    /// The next-page token is stored in `ctx` as a side effect; when the
    /// response carries none the stored token is cleared.
    pub async fn list_comments(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        params: &ListCommentsParams,
    ) -> DriveResult<Vec<Comment>> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/comments", encode_path(file_id));

        let page_token = params.page_token.clone().or_else(|| ctx.page_token());
        let query = ListCommentsQuery {
            include_deleted: params.include_deleted,
            max_results: params.max_results,
            page_token: page_token.as_deref(),
            updated_min: params.updated_min.as_deref(),
        };

        let response: CommentList = self.client()?.get_with_params(&path, &query).await?;

        save_page_token(ctx, NEXT_PAGE_TOKEN, response.next_page_token.as_deref());
        Ok(response.items)
    }

    /// Inserts a new comment on a file.
    pub async fn insert_comment(&self, file_id: &str, comment: &Comment) -> DriveResult<Comment> {
        require_id("file id", file_id)?;
        let path = format!("/files/{}/comments", encode_path(file_id));
        self.client()?.post(&path, comment).await
    }

    /// Replaces a comment with the supplied state.
    pub async fn update_comment(&self, file_id: &str, comment: &Comment) -> DriveResult<Comment> {
        require_id("file id", file_id)?;
        let id = require_present("comment id", comment.comment_id.as_deref())?;
        let path = format!(
            "/files/{}/comments/{}",
            encode_path(file_id),
            encode_path(id)
        );
        self.client()?.put(&path, comment).await
    }

    /// Makes a partial update to a comment. Only the fields named in
    /// `fields` are applied; the mask is sent exactly as given, in input
    /// order.
    pub async fn patch_comment(
        &self,
        file_id: &str,
        comment: &Comment,
        fields: &[&str],
    ) -> DriveResult<Comment> {
        require_id("file id", file_id)?;
        let id = require_present("comment id", comment.comment_id.as_deref())?;
        let path = format!(
            "/files/{}/comments/{}",
            encode_path(file_id),
            encode_path(id)
        );

        let query = FieldsQuery {
            fields: join_fields(fields),
        };

        self.client()?.patch_with_params(&path, &query, comment).await
    }

    /// Deletes a comment by id.
    pub async fn delete_comment(&self, file_id: &str, comment_id: &str) -> DriveResult<()> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let path = format!(
            "/files/{}/comments/{}",
            encode_path(file_id),
            encode_path(comment_id)
        );
        self.client()?.delete(&path).await
    }
}
