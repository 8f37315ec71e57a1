//! Comment-reply operations.

use super::{join_fields, require_id, require_present, GoogleDriveConnector};
use crate::client::encode_path;
use crate::errors::DriveResult;
use crate::model::{CommentReply, CommentReplyList};
use crate::pagination::{save_page_token, ExecutionContext, NEXT_PAGE_TOKEN};
use serde::Serialize;

/// Parameters for listing comment replies.
#[derive(Debug, Clone)]
pub struct ListRepliesParams {
    /// Whether deleted replies (with content stripped) are returned.
    pub include_deleted: bool,
    /// Maximum number of replies per page.
    pub max_results: u32,
    /// Continuation token; falls back to the one stored in the execution
    /// context when unset.
    pub page_token: Option<String>,
}

impl Default for ListRepliesParams {
    fn default() -> Self {
        Self {
            include_deleted: false,
            max_results: 100,
            page_token: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetReplyQuery {
    include_deleted: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRepliesQuery<'a> {
    include_deleted: bool,
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Serialize)]
struct FieldsQuery {
    fields: String,
}

impl GoogleDriveConnector {
    /// Gets a comment reply by id.
    pub async fn get_comment_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply_id: &str,
        include_deleted: bool,
    ) -> DriveResult<CommentReply> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        require_id("reply id", reply_id)?;
        let path = format!(
            "/files/{}/comments/{}/replies/{}",
            encode_path(file_id),
            encode_path(comment_id),
            encode_path(reply_id)
        );
        self.client()?
            .get_with_params(&path, &GetReplyQuery { include_deleted })
            .await
    }

    /// Lists all replies for a comment.
    ///
    /// The next-page token is stored in `ctx` as a side effect; when the
    /// response carries none the stored token is cleared.
    pub async fn list_comment_replies(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        comment_id: &str,
        params: &ListRepliesParams,
    ) -> DriveResult<Vec<CommentReply>> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let path = format!(
            "/files/{}/comments/{}/replies",
            encode_path(file_id),
            encode_path(comment_id)
        );

        let page_token = params.page_token.clone().or_else(|| ctx.page_token());
        let query = ListRepliesQuery {
            include_deleted: params.include_deleted,
            max_results: params.max_results,
            page_token: page_token.as_deref(),
        };

        let response: CommentReplyList = self.client()?.get_with_params(&path, &query).await?;

        save_page_token(ctx, NEXT_PAGE_TOKEN, response.next_page_token.as_deref());
        Ok(response.items)
    }

    /// Inserts a new reply on a comment.
    pub async fn insert_comment_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply: &CommentReply,
    ) -> DriveResult<CommentReply> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let path = format!(
            "/files/{}/comments/{}/replies",
            encode_path(file_id),
            encode_path(comment_id)
        );
        self.client()?.post(&path, reply).await
    }

    /// Replaces a comment reply with the supplied state.
    pub async fn update_comment_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply: &CommentReply,
    ) -> DriveResult<CommentReply> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let id = require_present("reply id", reply.reply_id.as_deref())?;
        let path = format!(
            "/files/{}/comments/{}/replies/{}",
            encode_path(file_id),
            encode_path(comment_id),
            encode_path(id)
        );
        self.client()?.put(&path, reply).await
    }

    /// Makes a partial update to a comment reply. Only the fields named in
    /// `fields` are applied; the mask is sent exactly as given, in input
    /// order.
    pub async fn patch_comment_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply: &CommentReply,
        fields: &[&str],
    ) -> DriveResult<CommentReply> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        let id = require_present("reply id", reply.reply_id.as_deref())?;
        let path = format!(
            "/files/{}/comments/{}/replies/{}",
            encode_path(file_id),
            encode_path(comment_id),
            encode_path(id)
        );

        let query = FieldsQuery {
            fields: join_fields(fields),
        };

        self.client()?.patch_with_params(&path, &query, reply).await
    }

    /// Deletes a reply from a comment.
    pub async fn delete_comment_reply(
        &self,
        file_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> DriveResult<()> {
        require_id("file id", file_id)?;
        require_id("comment id", comment_id)?;
        require_id("reply id", reply_id)?;
        let path = format!(
            "/files/{}/comments/{}/replies/{}",
            encode_path(file_id),
            encode_path(comment_id),
            encode_path(reply_id)
        );
        self.client()?.delete(&path).await
    }
}
