//! OAuth2 descriptor and access-token types.
//!
//! The OAuth2 dance itself (browser redirect, code exchange, refresh) is
//! carried out by an external module. This crate publishes the endpoints,
//! token-extraction regexes, and authorization parameters that module needs,
//! plus the [`AccessToken`] handed back through
//! [`GoogleDriveConnector::authorize`](crate::connector::GoogleDriveConnector::authorize).

use secrecy::{ExposeSecret, SecretString};

/// Google OAuth2 authorization endpoint.
pub const AUTHORIZATION_URL: &str = "https://accounts.google.com/o/oauth2/auth";

/// Google OAuth2 token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";

/// Regex extracting the access token from a token-endpoint response.
pub const ACCESS_TOKEN_REGEX: &str = "\"access_token\"[ ]*:[ ]*\"([^\\\"]*)\"";

/// Regex extracting the expiry (seconds) from a token-endpoint response.
pub const EXPIRATION_REGEX: &str = "\"expires_in\"[ ]*:[ ]*([\\d]*)";

/// Regex extracting the refresh token from a token-endpoint response.
pub const REFRESH_TOKEN_REGEX: &str = "\"refresh_token\"[ ]*:[ ]*\"([^\\\"]*)\"";

/// OAuth 2.0 scopes for Google Drive.
pub mod scopes {
    /// Access to the user's basic profile, used to key connected accounts.
    pub const USER_PROFILE: &str = "https://www.googleapis.com/auth/userinfo.profile";

    /// Full access to Drive files.
    pub const DRIVE: &str = "https://www.googleapis.com/auth/drive";

    /// Read-only access to installed Drive apps.
    pub const DRIVE_APPS_READONLY: &str = "https://www.googleapis.com/auth/drive.apps.readonly";

    /// Access to files created by the app.
    pub const DRIVE_FILE: &str = "https://www.googleapis.com/auth/drive.file";

    /// Read-only access to file metadata (no content).
    pub const DRIVE_METADATA_READONLY: &str =
        "https://www.googleapis.com/auth/drive.metadata.readonly";

    /// The default scope string requested during authorization.
    pub fn default_scope() -> String {
        [
            USER_PROFILE,
            DRIVE,
            DRIVE_APPS_READONLY,
            DRIVE_FILE,
            DRIVE_METADATA_READONLY,
        ]
        .join(" ")
    }
}

/// The `access_type` authorization parameter.
///
/// `Offline` asks Google for a refresh token usable when the user is not at
/// the browser; `Online` (the default) does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessType {
    /// Access only while the user is present (default).
    #[default]
    Online,
    /// Request a refresh token for offline access.
    Offline,
}

impl AccessType {
    /// Wire value sent on the authorization URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Online => "online",
            AccessType::Offline => "offline",
        }
    }
}

/// The `approval_prompt` authorization parameter.
///
/// `Force` asks for consent on every authorization; `Auto` (the default)
/// only the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForcePrompt {
    /// Ask only on first authorization (default).
    #[default]
    Auto,
    /// Ask on every authorization.
    Force,
}

impl ForcePrompt {
    /// Wire value sent on the authorization URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForcePrompt::Auto => "auto",
            ForcePrompt::Force => "force",
        }
    }
}

/// Policy deciding how a connected Google account is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierPolicy {
    /// Key accounts by email address (default).
    #[default]
    Email,
    /// Key accounts by the Google profile id.
    Profile,
}

impl IdentifierPolicy {
    /// Selects the identifier for an account given its profile id and email.
    pub fn key_for<'a>(&self, profile_id: &'a str, email: &'a str) -> &'a str {
        match self {
            IdentifierPolicy::Email => email,
            IdentifierPolicy::Profile => profile_id,
        }
    }
}

/// A bearer access token obtained by the external OAuth2 module.
#[derive(Clone)]
pub struct AccessToken {
    token: SecretString,
}

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Returns true if the token is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.token.expose_secret().trim().is_empty()
    }

    /// Renders the `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        AccessToken::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        AccessToken::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_contains_all_requested_scopes() {
        let scope = scopes::default_scope();
        assert!(scope.starts_with(scopes::USER_PROFILE));
        assert!(scope.contains(scopes::DRIVE));
        assert!(scope.contains(scopes::DRIVE_APPS_READONLY));
        assert!(scope.contains(scopes::DRIVE_FILE));
        assert!(scope.ends_with(scopes::DRIVE_METADATA_READONLY));
    }

    #[test]
    fn identifier_policy_selects_key() {
        assert_eq!(
            IdentifierPolicy::Email.key_for("12345", "user@example.com"),
            "user@example.com"
        );
        assert_eq!(
            IdentifierPolicy::Profile.key_for("12345", "user@example.com"),
            "12345"
        );
        assert_eq!(IdentifierPolicy::default(), IdentifierPolicy::Email);
    }

    #[test]
    fn access_token_renders_bearer_header() {
        let token = AccessToken::new("ya29.token");
        assert_eq!(token.authorization_header(), "Bearer ya29.token");
        assert!(!token.is_blank());
        assert!(AccessToken::new("   ").is_blank());
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("ya29.secret");
        assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
    }

    #[test]
    fn authorization_parameter_wire_values() {
        assert_eq!(AccessType::Online.as_str(), "online");
        assert_eq!(AccessType::Offline.as_str(), "offline");
        assert_eq!(ForcePrompt::Auto.as_str(), "auto");
        assert_eq!(ForcePrompt::Force.as_str(), "force");
    }
}
