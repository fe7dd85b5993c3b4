//! In-memory upstream used by unit tests

use crate::error::{Error, Result};
use crate::http::{Page, PageFetcher};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;

enum FakeResponse {
    Page(Page),
    Status(u16),
}

/// A `PageFetcher` serving canned pages by URL and recording every request
#[derive(Default)]
pub struct FakeFetcher {
    responses: HashMap<String, FakeResponse>,
    fallback: Option<Page>,
    requests: Mutex<Vec<(String, StringMap)>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for `url`
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, page: Page) -> Self {
        self.responses.insert(url.into(), FakeResponse::Page(page));
        self
    }

    /// Answer `url` with an error status
    #[must_use]
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), FakeResponse::Status(status));
        self
    }

    /// Serve `page` for any URL without a canned response
    #[must_use]
    pub fn with_fallback(mut self, page: Page) -> Self {
        self.fallback = Some(page);
        self
    }

    /// URLs requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Headers sent with the most recent request
    pub fn last_headers(&self) -> Option<StringMap> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|(_, headers)| headers.clone())
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch_page(&self, url: &str, headers: &StringMap) -> Result<Page> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), headers.clone()));

        match self.responses.get(url) {
            Some(FakeResponse::Page(page)) => Ok(page.clone()),
            Some(FakeResponse::Status(status)) => Err(Error::http_status(*status, "fake")),
            None => self
                .fallback
                .clone()
                .ok_or_else(|| Error::http_status(404, format!("no fake page for {url}"))),
        }
    }
}

/// `count` synthetic orders numbered from `first`
pub fn orders(first: usize, count: usize) -> Vec<JsonValue> {
    (first..first + count)
        .map(|n| {
            json!({
                "id": n,
                "name": format!("#{n}"),
                "created_at": "2024-03-01T10:00:00+05:30",
                "tags": "",
                "fulfillment_status": null,
                "line_items": [{"variant_id": n * 10}]
            })
        })
        .collect()
}

/// A page body holding `items` under `orders`
pub fn orders_page(items: Vec<JsonValue>) -> Page {
    Page::new(json!({ "orders": items }))
}

/// A Link header pointing at `next`
pub fn next_link(next: &str) -> String {
    format!("<{next}>; rel=\"next\"")
}
