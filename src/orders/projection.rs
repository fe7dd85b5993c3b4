//! Response field projections

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// Fields returned by a single-order lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// `created_at`, `tags`, `name`
    Summary,
    /// Summary plus `fulfillment_status` and `line_items[].variant_id`
    #[default]
    Tracking,
}

impl Projection {
    /// Reshape one upstream order
    pub fn project(&self, order: &JsonValue) -> JsonValue {
        let mut out = copy_fields(order, &["created_at", "tags", "name"]);

        if *self == Self::Tracking {
            out.extend(copy_fields(order, &["fulfillment_status"]));

            if let Some(items) = order.get("line_items").and_then(JsonValue::as_array) {
                let variants = items
                    .iter()
                    .map(|item| JsonValue::Object(copy_fields(item, &["variant_id"])))
                    .collect();
                out.insert("line_items".to_string(), JsonValue::Array(variants));
            }
        }

        JsonValue::Object(out)
    }
}

/// Fields returned for each order of a bulk listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkProjection {
    /// `name`, `created_at`, `fulfillment_status`
    #[default]
    Summary,
    /// Upstream order objects as received
    Raw,
}

impl BulkProjection {
    /// Reshape one upstream order
    pub fn project(&self, order: &JsonValue) -> JsonValue {
        match self {
            Self::Summary => JsonValue::Object(copy_fields(
                order,
                &["name", "created_at", "fulfillment_status"],
            )),
            Self::Raw => order.clone(),
        }
    }
}

// Absent fields are left out; explicit nulls are kept.
fn copy_fields(source: &JsonValue, fields: &[&str]) -> JsonObject {
    let mut out = JsonObject::new();
    for field in fields {
        if let Some(value) = source.get(*field) {
            out.insert((*field).to_string(), value.clone());
        }
    }
    out
}
