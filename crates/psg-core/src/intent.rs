//! Inbound search intent model.
//!
//! A [`SearchRequest`] is the raw request body with every field optional so
//! that validation, not deserialization, decides what is missing and can name
//! the offending field. [`SearchRequest::validate`] converts it into a
//! [`ValidatedSearch`] whose [`SearchIntent`] variants carry only the fields
//! relevant to the chosen intent; anything else the caller sent is dropped.

use serde::Deserialize;
use thiserror::Error;

/// Result count applied when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 15;

/// Raw inbound body of a `/search` request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "itemId")]
    pub item_id: Option<String>,
    pub query: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

/// A search intent with its required parameter, enforced by the type system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Search by product URL; the URL is turned into a text query downstream.
    Url { url: String },
    /// Recommendations for a known item identifier.
    Item { item_id: String },
    /// Free-text search, optionally scoped to a category.
    Nlp {
        query: String,
        category: Option<String>,
    },
}

/// A fully validated search: intent plus the effective result limit.
#[derive(Debug, Clone)]
pub struct ValidatedSearch {
    pub intent: SearchIntent,
    pub limit: u32,
}

/// Validation failures for an inbound search request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("invalid search type; must be \"url\", \"item\" or \"nlp\"")]
    UnknownType,

    #[error("{field} is required for {kind} search")]
    MissingField {
        field: &'static str,
        kind: &'static str,
    },
}

impl SearchRequest {
    /// Validates the raw request into a [`ValidatedSearch`].
    ///
    /// The `type` field is checked first; an unrecognized or absent value
    /// fails without consulting any other field. Each intent then requires
    /// its single parameter to be present and non-empty. `limit` defaults to
    /// [`DEFAULT_LIMIT`] and is floored at 1.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::UnknownType`] or [`IntentError::MissingField`]
    /// naming the absent parameter.
    pub fn validate(self) -> Result<ValidatedSearch, IntentError> {
        let intent = match self.kind.as_deref() {
            Some("url") => SearchIntent::Url {
                url: required(self.url, "url", "url")?,
            },
            Some("item") => SearchIntent::Item {
                item_id: required(self.item_id, "itemId", "item")?,
            },
            Some("nlp") => SearchIntent::Nlp {
                query: required(self.query, "query", "nlp")?,
                category: self.category.filter(|c| !c.is_empty()),
            },
            _ => return Err(IntentError::UnknownType),
        };

        Ok(ValidatedSearch {
            intent,
            limit: self.limit.unwrap_or(DEFAULT_LIMIT).max(1),
        })
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    kind: &'static str,
) -> Result<String, IntentError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(IntentError::MissingField { field, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> SearchRequest {
        serde_json::from_value(json).expect("request should deserialize")
    }

    #[test]
    fn url_intent_validates() {
        let validated = request(serde_json::json!({
            "type": "url",
            "url": "https://store.com/products/blue-denim-jacket",
        }))
        .validate()
        .expect("valid url request");

        assert_eq!(
            validated.intent,
            SearchIntent::Url {
                url: "https://store.com/products/blue-denim-jacket".to_string()
            }
        );
        assert_eq!(validated.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn item_intent_validates() {
        let validated = request(serde_json::json!({"type": "item", "itemId": "sku-42"}))
            .validate()
            .expect("valid item request");
        assert_eq!(
            validated.intent,
            SearchIntent::Item {
                item_id: "sku-42".to_string()
            }
        );
    }

    #[test]
    fn nlp_intent_carries_optional_category() {
        let validated = request(serde_json::json!({
            "type": "nlp",
            "query": "red wool coat",
            "category": "outerwear",
            "limit": 5,
        }))
        .validate()
        .expect("valid nlp request");

        assert_eq!(
            validated.intent,
            SearchIntent::Nlp {
                query: "red wool coat".to_string(),
                category: Some("outerwear".to_string()),
            }
        );
        assert_eq!(validated.limit, 5);
    }

    #[test]
    fn unknown_type_fails_before_other_fields() {
        // `url` is present and valid; the type check alone must reject this.
        let err = request(serde_json::json!({
            "type": "image",
            "url": "https://store.com/products/hat",
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err, IntentError::UnknownType);
    }

    #[test]
    fn missing_type_is_unknown() {
        let err = request(serde_json::json!({"url": "https://store.com/a"}))
            .validate()
            .unwrap_err();
        assert_eq!(err, IntentError::UnknownType);
    }

    #[test]
    fn missing_url_names_the_field() {
        let err = request(serde_json::json!({"type": "url"}))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            IntentError::MissingField {
                field: "url",
                kind: "url"
            }
        );
        assert_eq!(err.to_string(), "url is required for url search");
    }

    #[test]
    fn empty_item_id_counts_as_missing() {
        let err = request(serde_json::json!({"type": "item", "itemId": ""}))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            IntentError::MissingField {
                field: "itemId",
                kind: "item"
            }
        );
    }

    #[test]
    fn missing_query_names_the_field() {
        let err = request(serde_json::json!({"type": "nlp"}))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "query is required for nlp search");
    }

    #[test]
    fn category_on_url_intent_is_ignored() {
        let validated = request(serde_json::json!({
            "type": "url",
            "url": "https://store.com/products/hat",
            "category": "accessories",
        }))
        .validate()
        .expect("valid url request");
        assert!(matches!(validated.intent, SearchIntent::Url { .. }));
    }

    #[test]
    fn zero_limit_is_floored_to_one() {
        let validated = request(serde_json::json!({
            "type": "item",
            "itemId": "sku-1",
            "limit": 0,
        }))
        .validate()
        .expect("valid item request");
        assert_eq!(validated.limit, 1);
    }
}
