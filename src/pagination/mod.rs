//! Pagination module
//!
//! Follows an upstream page chain and concatenates the item records of
//! every page into one collection.
//!
//! # Overview
//!
//! A `Paginator` decides, from one fetched page, where the next page lives.
//! The `PageCollector` drives the fetch loop: it requests pages strictly in
//! sequence, appends their items, and stops at the first page that has no
//! items or no next link. The only strategy the store API needs is the
//! `rel="next"` Link header.

mod collector;
mod strategies;
mod types;

pub use collector::{fetch_all_pages, PageCollector};
pub use strategies::{parse_link_header, parse_next_link, LinkHeaderPaginator};
pub use types::{NextPage, PaginationState, Paginator};
