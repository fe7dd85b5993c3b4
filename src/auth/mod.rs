//! Authentication module
//!
//! Supports: Shopify admin access token, legacy API key + password (Basic)
//!
//! The `Authenticator` renders the configured credentials into the static
//! header map sent with every upstream request.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, ACCESS_TOKEN_HEADER};
pub use types::AuthConfig;
