//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};
use crate::http::Page;

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 5988)
///
/// Extracts next page URL from the Link header.
/// Format: `Link: <https://shop.example/orders.json?page_info=abc>; rel="next", ...`
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow (default: "next")
    pub rel: String,
}

impl Default for LinkHeaderPaginator {
    fn default() -> Self {
        Self {
            rel: "next".to_string(),
        }
    }
}

impl Paginator for LinkHeaderPaginator {
    fn process_page(
        &self,
        page: &Page,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_fetched(records_count as u64);

        if let Some(next_url) = page
            .link_header
            .as_deref()
            .and_then(|header| parse_link_header(header, &self.rel))
        {
            return NextPage::with_url(next_url);
        }

        NextPage::Done
    }
}

/// Extract the `rel="next"` URL from a Link header
pub fn parse_next_link(header: &str) -> Option<String> {
    parse_link_header(header, "next")
}

/// Parse a Link header and extract the URL for the given rel.
///
/// Segments are split on `,` and parts on `;`. A segment matches when any
/// part after the first contains `rel="<rel>"`; the first matching segment
/// wins. The URL is the first part, trimmed and stripped of `<` and `>`.
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    let needle = format!("rel=\"{target_rel}\"");

    for segment in header.split(',') {
        let mut parts = segment.split(';');
        let Some(target) = parts.next() else {
            continue;
        };

        if parts.any(|part| part.contains(&needle)) {
            let url = target.trim();
            let url = url.strip_prefix('<').unwrap_or(url);
            let url = url.strip_suffix('>').unwrap_or(url);
            return Some(url.trim().to_string());
        }
    }

    None
}
