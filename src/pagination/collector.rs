//! Paginated collection fetcher
//!
//! Drives the sequential page loop: fetch, extract items, append, follow
//! the next link. Any failure aborts the whole collection.

use super::strategies::LinkHeaderPaginator;
use super::types::{NextPage, PaginationState, Paginator};
use crate::error::Result;
use crate::http::PageFetcher;
use crate::types::{JsonValue, StringMap};
use tracing::{debug, info};

/// Collects the items of every page in a chain
pub struct PageCollector<'a> {
    fetcher: &'a dyn PageFetcher,
    paginator: &'a dyn Paginator,
    items_field: String,
}

impl<'a> PageCollector<'a> {
    /// Create a collector reading items from `items_field` of each page
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        paginator: &'a dyn Paginator,
        items_field: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            paginator,
            items_field: items_field.into(),
        }
    }

    /// Fetch pages starting at `seed_url` until the chain ends.
    ///
    /// A page with no items ends the chain even if it links onward. Nothing
    /// is returned unless every page in the chain was fetched successfully.
    pub async fn collect(&self, seed_url: &str, headers: &StringMap) -> Result<Vec<JsonValue>> {
        let mut accumulator = Vec::new();
        let mut state = PaginationState::new();
        let mut current_url = Some(seed_url.to_string());

        while let Some(url) = current_url.take() {
            let page = self.fetcher.fetch_page(&url, headers).await?;
            state.next_page();

            let items = page.items(&self.items_field)?;
            debug!("Page {}: fetched {} {}", state.page, items.len(), self.items_field);

            if items.is_empty() {
                break;
            }

            accumulator.extend_from_slice(items);

            match self.paginator.process_page(&page, items.len(), &mut state) {
                NextPage::Continue { url } => current_url = Some(url),
                NextPage::Done => {}
            }
        }

        info!(
            "Collected {} {} in {} pages",
            state.total_fetched,
            self.items_field,
            state.page
        );

        Ok(accumulator)
    }
}

/// Fetch every page of a `rel="next"` Link-header chain
pub async fn fetch_all_pages(
    fetcher: &dyn PageFetcher,
    seed_url: &str,
    headers: &StringMap,
    items_field: &str,
) -> Result<Vec<JsonValue>> {
    let paginator = LinkHeaderPaginator::default();
    PageCollector::new(fetcher, &paginator, items_field)
        .collect(seed_url, headers)
        .await
}
