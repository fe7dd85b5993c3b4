//! Configuration types
//!
//! Configuration is built once at startup and injected into the services
//! that need it. It can come from a YAML file, from the environment, or
//! both (environment values override the file).
//!
//! # Environment
//!
//! | Variable                          | Effect                              |
//! |-----------------------------------|-------------------------------------|
//! | `SHOPIFY_STORE`                   | store host, e.g. `x.myshopify.com`  |
//! | `SHOPIFY_ADMIN_API_ACCESS_TOKEN`  | access-token auth (preferred)       |
//! | `SHOPIFY_API_KEY`                 | basic auth username                 |
//! | `SHOPIFY_PASSWORD`                | basic auth password                 |
//! | `SHOPIFY_API_VERSION`             | admin API version                   |
//! | `ORDERS_PAGE_LIMIT`               | page size for bulk listing          |
//! | `CORS_ALLOWED_ORIGIN`             | `Access-Control-Allow-Origin` value |

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default admin API version
pub const DEFAULT_API_VERSION: &str = "2023-01";

/// Largest page size the admin API accepts
pub const MAX_PAGE_LIMIT: u32 = 250;

// ============================================================================
// Store Config
// ============================================================================

/// Upstream store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store host (`my-store.myshopify.com`) or full origin
    /// (`http://127.0.0.1:9000`)
    #[serde(default)]
    pub host: String,

    /// Admin API version segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Page size for bulk listing
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Authentication scheme
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_page_limit() -> u32 {
    MAX_PAGE_LIMIT
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            api_version: default_api_version(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
            auth: AuthConfig::None,
        }
    }
}

impl StoreConfig {
    /// Create a store config for `host` with default settings
    pub fn new(host: impl Into<String>, auth: AuthConfig) -> Self {
        Self {
            host: host.into(),
            auth,
            ..Default::default()
        }
    }

    /// Origin of the admin API (`https://` unless the host has a scheme)
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// URL of the orders collection, without query parameters
    pub fn orders_url(&self) -> Result<Url> {
        let url = format!(
            "{}/admin/api/{}/orders.json",
            self.base_url(),
            self.api_version
        );
        Ok(Url::parse(&url)?)
    }

    /// Upstream request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that required fields are present and in range
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::missing_field("SHOPIFY_STORE"));
        }
        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            return Err(Error::config(format!(
                "page_limit must be between 1 and {MAX_PAGE_LIMIT}, got {}",
                self.page_limit
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// Inbound HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Value of `Access-Control-Allow-Origin`
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storefront origin allowed by default
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://songcart.in";

fn default_allowed_origin() -> String {
    DEFAULT_ALLOWED_ORIGIN.to_string()
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
            bind: default_bind(),
            port: default_port(),
        }
    }
}

// ============================================================================
// App Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream store
    #[serde(default)]
    pub store: StoreConfig,

    /// Inbound server
    #[serde(default)]
    pub server: ServerSettings,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        config.store.validate()?;
        Ok(config)
    }

    /// Parse a YAML document (without environment overrides)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_lookup(path, |key| std::env::var(key).ok())
    }

    /// Load a YAML file, then apply overrides found by `lookup`
    pub fn from_file_with_lookup<F>(path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_yaml_str(&contents)?;
        config.apply_overrides(lookup)?;
        config.store.validate()?;
        Ok(config)
    }

    /// Apply values found by `lookup` on top of the current config.
    ///
    /// Empty values count as unset. An access token takes precedence over
    /// an API key and password pair.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("SHOPIFY_STORE") {
            self.store.host = host;
        }
        if let Some(version) = get("SHOPIFY_API_VERSION") {
            self.store.api_version = version;
        }
        if let Some(limit) = get("ORDERS_PAGE_LIMIT") {
            self.store.page_limit = limit.trim().parse().map_err(|_| {
                Error::config(format!("ORDERS_PAGE_LIMIT is not a number: {limit}"))
            })?;
        }
        if let Some(origin) = get("CORS_ALLOWED_ORIGIN") {
            self.server.allowed_origin = origin;
        }

        if let Some(token) = get("SHOPIFY_ADMIN_API_ACCESS_TOKEN") {
            self.store.auth = AuthConfig::access_token(token);
        } else if let (Some(key), Some(password)) =
            (get("SHOPIFY_API_KEY"), get("SHOPIFY_PASSWORD"))
        {
            self.store.auth = AuthConfig::basic(key, password);
        }

        Ok(())
    }
}
