//! Comment and comment-reply resources.

use super::Timestamp;
use crate::model::User;
use serde::{Deserialize, Serialize};

/// A comment on a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Region of the document the comment is anchored to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    /// The comment's author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    /// Comment id. Assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,

    /// Plain-text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Context of the file the comment refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<CommentContext>,

    /// Create time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,

    /// Whether the comment has been deleted; content is stripped when so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// Id of the file the comment addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Title of the file the comment addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_title: Option<String>,

    /// HTML-formatted content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,

    /// Last modification time of the comment or any of its replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<Timestamp>,

    /// Replies to this comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<CommentReply>>,

    /// Status: `open` or `resolved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Link back to this comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// Snippet of the file content the comment refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentContext {
    /// MIME type of the snippet.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub context_type: Option<String>,

    /// The snippet itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A reply to a comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReply {
    /// The reply's author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,

    /// Plain-text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Create time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<Timestamp>,

    /// Whether the reply has been deleted; content is stripped when so.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// HTML-formatted content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,

    /// Last modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<Timestamp>,

    /// Reply id. Assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_id: Option<String>,

    /// Action the reply performed on the parent comment: `resolve` or
    /// `reopen`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A page of comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentList {
    /// The comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Comment>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}

/// A page of comment replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentReplyList {
    /// The replies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CommentReply>,

    /// Continuation token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,

    /// Forward-compatible fields not modeled explicitly.
    #[serde(flatten)]
    pub additional: serde_json::Map<String, serde_json::Value>,
}
