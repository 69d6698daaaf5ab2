//! Normalization of Miros records into the canonical output shape.
//!
//! Miros does not keep a stable naming convention across its query types:
//! the same semantic field may arrive camelCased, snake_cased, or under an
//! alternate spelling entirely. Each canonical field therefore has a fixed
//! priority list of candidate keys, tried in order with early exit on the
//! first usable value. The canonical key is always among the candidates, so
//! re-normalizing an already-normalized record is a no-op.

use serde::Serialize;
use serde_json::Value;

use crate::types::UpstreamRecord;

/// Placeholder for every absent field except `url`, which defaults to `""`.
const PLACEHOLDER: &str = "-";

/// Canonical output record: all eight fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub product_title: String,
    pub option_id: String,
    pub colour_variant_id: String,
    pub url: String,
    pub super_category: String,
    pub department: String,
    pub key_section: String,
    pub preferred_category: String,
}

/// Maps one upstream record into a [`NormalizedItem`]. Total: never fails,
/// substituting placeholders for anything absent.
#[must_use]
pub fn normalize_item(record: &UpstreamRecord) -> NormalizedItem {
    NormalizedItem {
        product_title: resolve(record, &["title", "name", "productTitle"], PLACEHOLDER),
        option_id: resolve(record, &["optionId", "option_id", "optionID"], PLACEHOLDER),
        colour_variant_id: resolve(
            record,
            &["colourVariantId", "colour_variant_id", "colourVariantID"],
            PLACEHOLDER,
        ),
        url: resolve(record, &["url", "productUrl", "product_url", "uri"], ""),
        super_category: resolve(
            record,
            &["superCategory", "super_category", "category"],
            PLACEHOLDER,
        ),
        department: resolve(
            record,
            &["department", "cpDepartment", "cp_department", "departmentName"],
            PLACEHOLDER,
        ),
        key_section: resolve(
            record,
            &["keySection", "cpKeySection", "cp_key_section", "section"],
            PLACEHOLDER,
        ),
        preferred_category: resolve(
            record,
            &[
                "preferredCategory",
                "cpPrefCategory",
                "cp_pref_category",
                "prefCategory",
            ],
            PLACEHOLDER,
        ),
    }
}

/// Returns the first candidate key holding a usable value, else the default.
///
/// Non-empty strings are taken as-is; numbers are rendered as strings (the
/// API has been seen returning numeric ids). Anything else counts as absent.
fn resolve(record: &UpstreamRecord, candidates: &[&str], default: &str) -> String {
    for key in candidates {
        match record.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    default.to_string()
}
