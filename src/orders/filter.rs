//! Query routing and bulk filters

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use url::Url;

/// Upstream filter derived from a free-text order query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// Match the customer email
    Email(String),
    /// Match the order name (the `#1001` style order number)
    Name(String),
}

impl OrderFilter {
    /// Route a query: anything containing `@` is an email
    pub fn from_query(query: &str) -> Self {
        if query.contains('@') {
            Self::Email(query.to_string())
        } else {
            Self::Name(query.to_string())
        }
    }

    /// Upstream query parameter name
    pub fn param(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Name(_) => "name",
        }
    }

    /// The value being matched
    pub fn value(&self) -> &str {
        match self {
            Self::Email(v) | Self::Name(v) => v,
        }
    }

    /// Append the filter to `url` as a query parameter
    pub fn apply(&self, url: &mut Url) {
        url.query_pairs_mut().append_pair(self.param(), self.value());
    }
}

/// Filter applied to a bulk listing after it has been collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BulkFilter {
    /// Orders that are not fulfilled yet
    #[default]
    Pending,
    /// Every order
    All,
}

impl BulkFilter {
    /// Parse the inbound `filter` parameter.
    ///
    /// Missing means `default`; unrecognised values mean `All`.
    pub fn from_param(param: Option<&str>, default: Self) -> Self {
        match param {
            None => default,
            Some("pending") => Self::Pending,
            Some(_) => Self::All,
        }
    }

    /// Check whether an order passes this filter
    pub fn matches(&self, order: &JsonValue) -> bool {
        match self {
            Self::All => true,
            Self::Pending => match order.get("fulfillment_status") {
                Some(JsonValue::String(status)) => !status.eq_ignore_ascii_case("fulfilled"),
                _ => true,
            },
        }
    }
}
