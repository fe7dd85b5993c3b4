//! Authenticator implementation
//!
//! Turns an `AuthConfig` into request headers.

use super::types::AuthConfig;
use crate::types::StringMap;
use base64::Engine as _;

/// Header carrying the admin API access token
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Authenticator renders upstream auth headers
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Build the static auth headers for upstream requests
    pub fn headers(&self) -> StringMap {
        let mut headers = StringMap::new();

        match &self.config {
            AuthConfig::None => {}
            AuthConfig::AccessToken { token } => {
                headers.insert(ACCESS_TOKEN_HEADER.to_string(), token.clone());
            }
            AuthConfig::Basic { username, password } => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{username}:{password}"));
                headers.insert("Authorization".to_string(), format!("Basic {credentials}"));
            }
        }

        headers
    }
}
