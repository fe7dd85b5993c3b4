//! HTTP client module
//!
//! Provides the `PageFetcher` capability used by the pagination and order
//! modules, and its reqwest-backed implementation.
//!
//! # Features
//!
//! - **Page fetching**: one GET per call, JSON body plus the raw Link header
//! - **Fakeable**: anything implementing `PageFetcher` can stand in for the
//!   upstream store in tests
//! - **No retries**: the first failure is returned to the caller

mod client;
mod fetcher;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetcher::{Page, PageFetcher};

#[cfg(test)]
mod tests;
