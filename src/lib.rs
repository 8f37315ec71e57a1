//! Google Drive Connector
//!
//! A type-safe connector for Google Drive's REST API v2 using OAuth2 bearer
//! authorization. It exposes the full operation catalog — files, folders,
//! permissions, revisions, comments, replies, apps, changes, and account
//! information — over typed resource models that mirror the wire format
//! exactly.
//!
//! # Lifecycle
//!
//! The connector is built unauthenticated from a configuration; the access
//! token obtained by an external OAuth2 module is installed afterwards:
//!
//! ```no_run
//! use google_drive_connector::{ConnectorConfig, GoogleDriveConnector};
//! use google_drive_connector::connector::ListFilesParams;
//! use google_drive_connector::pagination::ExecutionContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectorConfig::builder()
//!     .consumer_key("consumer-key.apps.googleusercontent.com")
//!     .consumer_secret("consumer-secret")
//!     .build()?;
//!
//! let connector = GoogleDriveConnector::new(config);
//! connector.authorize("ya29.access-token")?;
//!
//! let ctx = ExecutionContext::new();
//! let files = connector.list_files(&ctx, &ListFilesParams::default()).await?;
//! for file in files {
//!     println!("{:?}: {:?}", file.title, file.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Paging
//!
//! Listing operations store the next-page continuation token in the
//! caller's [`pagination::ExecutionContext`] under a fixed key instead of
//! returning it; an absent entry after a call means the result set is
//! exhausted.
//!
//! # Errors
//!
//! Local validation failures surface as
//! [`DriveError::InvalidArgument`](errors::DriveError::InvalidArgument)
//! before any request is issued; a rejected access token surfaces as the
//! distinguished
//! [`DriveError::TokenExpired`](errors::DriveError::TokenExpired) signal the
//! external OAuth layer reacts to. Nothing is retried.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod config;
pub mod connector;
pub mod errors;
pub mod model;
pub mod pagination;
pub mod stream;
pub mod transport;

// Re-exports for convenience
pub use auth::{AccessToken, IdentifierPolicy};
pub use config::{ConnectorConfig, ConnectorConfigBuilder};
pub use connector::GoogleDriveConnector;
pub use errors::{DriveError, DriveResult};
pub use stream::StreamContent;

/// Prelude module with commonly used types.
///
/// ```no_run
/// use google_drive_connector::prelude::*;
/// ```
pub mod prelude {
    // Connector and configuration
    pub use crate::config::{ConnectorConfig, ConnectorConfigBuilder};
    pub use crate::connector::{
        GoogleDriveConnector, CopyParams, FileWriteParams, InsertPermissionParams,
        ListChangesParams, ListChildrenParams, ListCommentsParams, ListFilesParams,
        ListRepliesParams, UploadParams, ROOT_FOLDER,
    };

    // Authorization
    pub use crate::auth::{AccessToken, IdentifierPolicy};

    // Models
    pub use crate::model::{
        About, App, Change, ChildReference, Comment, CommentReply, File, ParentReference,
        Permission, Revision, User,
    };

    // Paging
    pub use crate::pagination::{ExecutionContext, NEXT_PAGE_TOKEN};

    // Content
    pub use crate::stream::StreamContent;
    pub use crate::transport::ByteStream;

    // Errors
    pub use crate::errors::{DriveError, DriveResult};
}
