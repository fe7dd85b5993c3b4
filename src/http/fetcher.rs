//! Page fetching abstraction

use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;

/// One upstream HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Parsed JSON body
    pub body: JsonValue,
    /// Raw `Link` header value, if the response carried one
    pub link_header: Option<String>,
}

impl Page {
    /// Create a page without a Link header
    pub fn new(body: JsonValue) -> Self {
        Self {
            body,
            link_header: None,
        }
    }

    /// Attach a Link header value
    #[must_use]
    pub fn with_link_header(mut self, link: impl Into<String>) -> Self {
        self.link_header = Some(link.into());
        self
    }

    /// Item records stored under `field`.
    ///
    /// A missing or `null` field is an empty page. Any other non-array value
    /// is a malformed response.
    pub fn items(&self, field: &str) -> Result<&[JsonValue]> {
        match self.body.get(field) {
            None | Some(JsonValue::Null) => Ok(&[]),
            Some(JsonValue::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(Error::decode(format!("'{field}' is not an array"))),
        }
    }
}

/// Fetches a single page from the upstream API
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issue a GET to `url` with `headers`.
    ///
    /// Fails on transport errors, non-success statuses and non-JSON bodies.
    async fn fetch_page(&self, url: &str, headers: &StringMap) -> Result<Page>;
}
