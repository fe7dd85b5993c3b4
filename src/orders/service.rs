//! Order service
//!
//! One configurable service behind every order endpoint: the filter
//! strategy and the projection are parameters, not separate handlers.

use super::filter::{BulkFilter, OrderFilter};
use super::projection::{BulkProjection, Projection};
use crate::auth::Authenticator;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, PageFetcher};
use crate::pagination::fetch_all_pages;
use crate::types::{JsonValue, StringMap};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Field holding the order list in upstream responses
pub const ORDERS_FIELD: &str = "orders";

/// Runs order queries against the upstream store
#[derive(Clone)]
pub struct OrderService {
    store: StoreConfig,
    fetcher: Arc<dyn PageFetcher>,
    headers: StringMap,
}

impl OrderService {
    /// Create a service using `fetcher` for upstream requests
    pub fn new(store: StoreConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let headers = Authenticator::new(store.auth.clone()).headers();
        Self {
            store,
            fetcher,
            headers,
        }
    }

    /// Create a service backed by a real HTTP client
    pub fn from_config(store: StoreConfig) -> Result<Self> {
        let client = HttpClient::with_config(
            HttpClientConfig::builder().timeout(store.timeout()).build(),
        )?;
        Ok(Self::new(store, Arc::new(client)))
    }

    /// Get the store config
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    /// Upstream URL for a single-order lookup
    pub fn lookup_url(&self, filter: &OrderFilter) -> Result<Url> {
        let mut url = self.store.orders_url()?;
        url.query_pairs_mut().append_pair("status", "any");
        filter.apply(&mut url);
        Ok(url)
    }

    /// Upstream seed URL for a bulk listing
    pub fn list_url(&self) -> Result<Url> {
        let mut url = self.store.orders_url()?;
        url.query_pairs_mut()
            .append_pair("status", "any")
            .append_pair("limit", &self.store.page_limit.to_string());
        Ok(url)
    }

    /// Look up the most recent order matching `query`.
    ///
    /// Only the first upstream page is read. No match is `Error::NotFound`.
    pub async fn lookup_order(&self, query: &str, projection: Projection) -> Result<JsonValue> {
        if query.is_empty() {
            return Err(Error::missing_parameter("query"));
        }

        let filter = OrderFilter::from_query(query);
        let url = self.lookup_url(&filter)?;
        info!("Looking up order by {}", filter.param());

        let page = self.fetcher.fetch_page(url.as_str(), &self.headers).await?;
        let order = page.items(ORDERS_FIELD)?.first().ok_or(Error::NotFound)?;

        Ok(projection.project(order))
    }

    /// List every order, following upstream pagination.
    ///
    /// An empty store yields an empty list.
    pub async fn list_orders(
        &self,
        filter: BulkFilter,
        projection: BulkProjection,
    ) -> Result<Vec<JsonValue>> {
        let url = self.list_url()?;
        let orders =
            fetch_all_pages(self.fetcher.as_ref(), url.as_str(), &self.headers, ORDERS_FIELD)
                .await?;
        let total = orders.len();

        let projected: Vec<JsonValue> = orders
            .iter()
            .filter(|order| filter.matches(order))
            .map(|order| projection.project(order))
            .collect();

        debug!(
            "Listing {} of {} orders (filter: {:?})",
            projected.len(),
            total,
            filter
        );

        Ok(projected)
    }
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
