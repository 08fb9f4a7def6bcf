//! Configuration types for the auth core

use chrono::Duration;

/// Auth core configuration.
///
/// Access and refresh tokens are signed with independent secrets so a
/// leaked access secret cannot be used to mint refresh tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for access tokens
    pub access_secret: String,
    /// HMAC secret for refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime (short: minutes)
    pub access_ttl: Duration,
    /// Refresh token lifetime (long: days)
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Create a config with the default lifetimes (15 minutes / 3 days)
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(3),
        }
    }

    /// Set the access token lifetime
    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}
