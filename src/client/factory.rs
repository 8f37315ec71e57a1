//! Pluggable construction of the authenticated client.

use crate::auth::AccessToken;
use crate::client::DriveClient;
use crate::config::ConnectorConfig;
use crate::errors::{DriveError, DriveResult};
use crate::transport::ReqwestTransport;
use std::sync::Arc;

/// Strategy producing an authenticated [`DriveClient`].
///
/// The connector calls this once per successful authorization, passing the
/// freshly obtained access token. Overriding the factory is how tests inject
/// a fake transport without touching the facade's code path.
pub trait DriveClientFactory: Send + Sync {
    /// Builds a client bound to the token, the configured application name,
    /// and the configured endpoints.
    fn new_client(
        &self,
        access_token: AccessToken,
        config: &ConnectorConfig,
    ) -> DriveResult<DriveClient>;
}

/// Default factory backed by a reqwest transport.
pub struct DefaultDriveClientFactory;

impl DriveClientFactory for DefaultDriveClientFactory {
    fn new_client(
        &self,
        access_token: AccessToken,
        config: &ConnectorConfig,
    ) -> DriveResult<DriveClient> {
        let transport = ReqwestTransport::with_defaults()
            .map_err(|e| DriveError::configuration(format!("Failed to create transport: {}", e)))?;
        Ok(DriveClient::new(Arc::new(transport), access_token, config))
    }
}
