//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream authentication scheme
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication (local mocks only)
    #[default]
    None,

    /// Admin API access token sent in the `X-Shopify-Access-Token` header
    AccessToken {
        /// The admin API access token
        token: String,
    },

    /// Legacy private app credentials sent as HTTP Basic
    Basic {
        /// API key
        username: String,
        /// API password
        password: String,
    },
}

impl AuthConfig {
    /// Create access token auth
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken {
            token: token.into(),
        }
    }

    /// Create basic auth
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Short name of the scheme, for logs
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AccessToken { .. } => "access_token",
            Self::Basic { .. } => "basic",
        }
    }
}

// Credentials must never reach the logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::AccessToken { .. } => f
                .debug_struct("AccessToken")
                .field("token", &"<redacted>")
                .finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
