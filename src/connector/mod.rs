//! The connector facade: configuration, lifecycle, and the operation
//! catalog, one method per Drive API v2 call.

use crate::auth::AccessToken;
use crate::client::DriveClient;
use crate::config::ConnectorConfig;
use crate::errors::{DriveError, DriveResult};
use crate::transport::ByteStream;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

mod about;
mod apps;
mod changes;
mod comments;
mod files;
mod folders;
mod permissions;
mod replies;
mod revisions;

pub use changes::ListChangesParams;
pub use comments::ListCommentsParams;
pub use files::{CopyParams, FileWriteParams, ListFilesParams, UploadParams};
pub use folders::ListChildrenParams;
pub use permissions::InsertPermissionParams;
pub use replies::ListRepliesParams;

/// Alias accepted by folder operations for the root folder.
pub const ROOT_FOLDER: &str = "root";

/// Google Drive connector.
///
/// Built unauthenticated from a [`ConnectorConfig`]; [`authorize`] installs
/// the client once the external OAuth2 module has obtained an access token.
/// Every operation requires the authorized state. The client handle is
/// replaced wholesale on re-authorization — operations already in flight
/// keep the handle they started with.
///
/// [`authorize`]: GoogleDriveConnector::authorize
pub struct GoogleDriveConnector {
    config: ConnectorConfig,
    client: RwLock<Option<Arc<DriveClient>>>,
}

impl GoogleDriveConnector {
    /// Creates an unauthenticated connector.
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
        }
    }

    /// The connector configuration.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Whether an authorized client is installed.
    pub fn is_authorized(&self) -> bool {
        self.client.read().expect("client lock poisoned").is_some()
    }

    /// Post-authorization hook: builds a client bound to the new token and
    /// swaps it in atomically.
    pub fn authorize(&self, access_token: impl Into<AccessToken>) -> DriveResult<()> {
        let token = access_token.into();
        if token.is_blank() {
            return Err(DriveError::invalid_argument("Access token must not be blank"));
        }

        let client = self.config.client_factory.new_client(token, &self.config)?;

        let mut guard = self.client.write().expect("client lock poisoned");
        *guard = Some(Arc::new(client));

        info!(application = %self.config.application_name, "Drive client authorized");
        Ok(())
    }

    /// Drops the installed client, returning to the unauthenticated state.
    /// Invoked by the external OAuth layer after a token-expired signal.
    pub fn revoke_authorization(&self) {
        let mut guard = self.client.write().expect("client lock poisoned");
        if guard.take().is_some() {
            warn!("Drive client authorization revoked");
        }
    }

    pub(crate) fn client(&self) -> DriveResult<Arc<DriveClient>> {
        self.client
            .read()
            .expect("client lock poisoned")
            .clone()
            .ok_or_else(|| {
                DriveError::NotAuthorized(
                    "No access token has been authorized for this connector".to_string(),
                )
            })
    }

    /// Streams the content behind a resource's download URL. A missing or
    /// blank URL fails before any request is issued.
    pub(crate) async fn download(&self, download_url: Option<&str>) -> DriveResult<ByteStream> {
        let url = match download_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                return Err(DriveError::invalid_argument(
                    "Download url is null or blank",
                ))
            }
        };

        self.client()?.download(url).await
    }
}

/// Joins a patch field list into the wire mask: comma-separated, input
/// order, no deduplication.
pub(crate) fn join_fields(fields: &[&str]) -> String {
    fields.join(",")
}

/// Rejects blank resource ids before a request is built.
pub(crate) fn require_id(name: &str, value: &str) -> DriveResult<()> {
    if value.trim().is_empty() {
        return Err(DriveError::invalid_argument(format!(
            "{} must not be blank",
            name
        )));
    }
    Ok(())
}

/// Extracts a required id carried on a model instance.
pub(crate) fn require_present<'a>(name: &str, value: Option<&'a str>) -> DriveResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DriveError::invalid_argument(format!(
            "{} must not be blank",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_fields_is_literal_and_ordered() {
        assert_eq!(join_fields(&["title", "description"]), "title,description");
        assert_eq!(join_fields(&["b", "a", "b"]), "b,a,b");
        assert_eq!(join_fields(&[]), "");
    }

    #[test]
    fn require_id_rejects_blank() {
        assert!(require_id("file id", "abc").is_ok());
        assert!(matches!(
            require_id("file id", "  "),
            Err(DriveError::InvalidArgument(_))
        ));
    }

    #[test]
    fn require_present_rejects_missing() {
        assert_eq!(require_present("id", Some("x")).unwrap(), "x");
        assert!(require_present("id", None).is_err());
        assert!(require_present("id", Some("")).is_err());
    }
}
