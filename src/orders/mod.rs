//! Order lookup module
//!
//! Read-only order queries against the store admin API.
//!
//! # Overview
//!
//! - `OrderFilter` routes a free-text query to an `email` or `name` filter
//! - `Projection` / `BulkProjection` select the fields returned to callers
//! - `BulkFilter` narrows a bulk listing (pending or all orders)
//! - `OrderService` runs single lookups and paginated bulk listings

mod filter;
mod projection;
mod service;

pub use filter::{BulkFilter, OrderFilter};
pub use projection::{BulkProjection, Projection};
pub use service::{OrderService, ORDERS_FIELD};
