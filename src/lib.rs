#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Order Tracking Proxy
//!
//! A small HTTP service that answers storefront order lookups from the
//! Shopify Admin REST API and returns only the fields the storefront needs.
//!
//! ## Features
//!
//! - **Single lookups**: by customer email or order name, first match only
//! - **Bulk listing**: follows `rel="next"` Link-header pagination to the end
//! - **Field projection**: upstream orders are reduced before leaving the proxy
//! - **Injected config**: store host and credentials are passed in, never read ad hoc
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_tracking::{config::AppConfig, orders::{OrderService, Projection}, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let service = OrderService::from_config(config.store)?;
//!
//!     let order = service.lookup_order("bob@example.com", Projection::Tracking).await?;
//!     println!("{order}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │            HTTP server (axum) / CLI (clap)                   │
//! │  method check · CORS · query param · error → { "error" }     │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │                       OrderService                           │
//! │   OrderFilter (email | name)   Projection / BulkProjection   │
//! └──────────┬───────────────────────────────────┬───────────────┘
//!            │                                   │
//! ┌──────────┴──────────┐   ┌──────────────────┐ │ ┌─────────────┐
//! │ PageCollector       │──▶│ PageFetcher      │◀┘ │ Auth        │
//! │ Link: rel="next"    │   │ (HttpClient)     │◀──│ token/basic │
//! └─────────────────────┘   └──────────────────┘   └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration loading
pub mod config;

/// Upstream authentication
pub mod auth;

/// HTTP client and page fetching
pub mod http;

/// Link-header pagination
pub mod pagination;

/// Order lookups, filters and projections
pub mod orders;

/// Command-line interface and HTTP server
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
