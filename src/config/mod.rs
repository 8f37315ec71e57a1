//! Connector configuration.

use crate::auth::{scopes, IdentifierPolicy};
use crate::client::factory::{DefaultDriveClientFactory, DriveClientFactory};
use crate::errors::{DriveError, DriveResult};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default application name registered on the Google API console.
pub const DEFAULT_APPLICATION_NAME: &str = "Mule-GoogleDriveConnector/1.0";

/// Default Drive API v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v2";

/// Default Drive API v2 upload endpoint.
pub const DEFAULT_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v2";

/// Immutable-after-setup configuration for the connector.
#[derive(Clone)]
pub struct ConnectorConfig {
    /// OAuth2 consumer key.
    pub consumer_key: String,

    /// OAuth2 consumer secret.
    pub consumer_secret: SecretString,

    /// Application name, sent as the user agent on every request.
    pub application_name: String,

    /// Space-separated OAuth scopes requested during authorization.
    pub scope: String,

    /// How connected accounts are keyed.
    pub identifier_policy: IdentifierPolicy,

    /// Factory producing the authenticated client after authorization.
    pub client_factory: Arc<dyn DriveClientFactory>,

    /// Base URL for the API.
    pub base_url: Url,

    /// Base URL for content uploads.
    pub upload_url: Url,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ConnectorConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ConnectorConfigBuilder {
        ConnectorConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> DriveResult<()> {
        if self.consumer_key.trim().is_empty() {
            return Err(DriveError::configuration("Consumer key must not be blank"));
        }

        if self.consumer_secret.expose_secret().trim().is_empty() {
            return Err(DriveError::configuration("Consumer secret must not be blank"));
        }

        if self.application_name.trim().is_empty() {
            return Err(DriveError::configuration("Application name must not be blank"));
        }

        require_https(&self.base_url, "Base URL")?;
        require_https(&self.upload_url, "Upload URL")?;

        Ok(())
    }
}

impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("application_name", &self.application_name)
            .field("scope", &self.scope)
            .field("identifier_policy", &self.identifier_policy)
            .field("base_url", &self.base_url.as_str())
            .field("upload_url", &self.upload_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`ConnectorConfig`].
pub struct ConnectorConfigBuilder {
    consumer_key: Option<String>,
    consumer_secret: Option<SecretString>,
    application_name: String,
    scope: Option<String>,
    identifier_policy: IdentifierPolicy,
    client_factory: Option<Arc<dyn DriveClientFactory>>,
    base_url: Option<Url>,
    upload_url: Option<Url>,
    timeout: Duration,
}

impl ConnectorConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            consumer_key: None,
            consumer_secret: None,
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            scope: None,
            identifier_policy: IdentifierPolicy::default(),
            client_factory: None,
            base_url: None,
            upload_url: None,
            timeout: Duration::from_secs(300),
        }
    }

    /// Sets the OAuth2 consumer key.
    pub fn consumer_key(mut self, key: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self
    }

    /// Sets the OAuth2 consumer secret.
    pub fn consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(SecretString::new(secret.into()));
        self
    }

    /// Sets the application name.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Sets the OAuth scope string.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the identifier policy.
    pub fn identifier_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.identifier_policy = policy;
        self
    }

    /// Sets a custom client factory. Most common use case is testing.
    pub fn client_factory<F: DriveClientFactory + 'static>(mut self, factory: F) -> Self {
        self.client_factory = Some(Arc::new(factory));
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl AsRef<str>) -> DriveResult<Self> {
        self.base_url = Some(parse_url(url.as_ref())?);
        Ok(self)
    }

    /// Sets the upload URL.
    pub fn upload_url(mut self, url: impl AsRef<str>) -> DriveResult<Self> {
        self.upload_url = Some(parse_url(url.as_ref())?);
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> DriveResult<ConnectorConfig> {
        let consumer_key = self
            .consumer_key
            .ok_or_else(|| DriveError::configuration("Consumer key is required"))?;

        let consumer_secret = self
            .consumer_secret
            .ok_or_else(|| DriveError::configuration("Consumer secret is required"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => parse_url(DEFAULT_BASE_URL)?,
        };

        let upload_url = match self.upload_url {
            Some(url) => url,
            None => parse_url(DEFAULT_UPLOAD_URL)?,
        };

        let config = ConnectorConfig {
            consumer_key,
            consumer_secret,
            application_name: self.application_name,
            scope: self.scope.unwrap_or_else(scopes::default_scope),
            identifier_policy: self.identifier_policy,
            client_factory: self
                .client_factory
                .unwrap_or_else(|| Arc::new(DefaultDriveClientFactory)),
            base_url,
            upload_url,
            timeout: self.timeout,
        };

        config.validate()?;

        Ok(config)
    }
}

impl Default for ConnectorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_url(url: &str) -> DriveResult<Url> {
    Url::parse(url).map_err(|e| DriveError::configuration(format!("Invalid URL '{}': {}", url, e)))
}

// Plain HTTP is only acceptable against loopback (local emulators, tests).
fn require_https(url: &Url, name: &str) -> DriveResult<()> {
    if url.scheme() == "https" {
        return Ok(());
    }

    let loopback = match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .parse::<std::net::IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    };

    if loopback {
        Ok(())
    } else {
        Err(DriveError::configuration(format!("{} must use HTTPS", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConnectorConfig::builder()
            .consumer_key("key")
            .consumer_secret("secret")
            .build()
            .unwrap();

        assert_eq!(config.application_name, DEFAULT_APPLICATION_NAME);
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.upload_url.as_str(), DEFAULT_UPLOAD_URL);
        assert_eq!(config.identifier_policy, IdentifierPolicy::Email);
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.scope.contains("https://www.googleapis.com/auth/drive"));
    }

    #[test]
    fn missing_credentials_rejected() {
        assert!(ConnectorConfig::builder().build().is_err());
        assert!(ConnectorConfig::builder().consumer_key("key").build().is_err());
        assert!(ConnectorConfig::builder()
            .consumer_key("  ")
            .consumer_secret("secret")
            .build()
            .is_err());
    }

    #[test]
    fn non_https_endpoint_rejected() {
        let result = ConnectorConfig::builder()
            .consumer_key("key")
            .consumer_secret("secret")
            .base_url("http://insecure.example.com")
            .unwrap()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn plain_http_allowed_for_loopback() {
        let result = ConnectorConfig::builder()
            .consumer_key("key")
            .consumer_secret("secret")
            .base_url("http://127.0.0.1:8080")
            .unwrap()
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn custom_values() {
        let config = ConnectorConfig::builder()
            .consumer_key("key")
            .consumer_secret("secret")
            .application_name("MyApp/2.0")
            .scope("https://www.googleapis.com/auth/drive.readonly")
            .identifier_policy(IdentifierPolicy::Profile)
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.application_name, "MyApp/2.0");
        assert_eq!(config.scope, "https://www.googleapis.com/auth/drive.readonly");
        assert_eq!(config.identifier_policy, IdentifierPolicy::Profile);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ConnectorConfig::builder()
            .consumer_key("key")
            .consumer_secret("hunter2")
            .build()
            .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
