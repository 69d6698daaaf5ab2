//! GraphQL documents and variable construction for the Miros API.
//!
//! All three operations request the same projection of record fields so the
//! normalizer can be shared across intents.

use serde_json::{json, Value};

const TEXT_SEARCH: &str = "\
query Search($textQuery: String!, $limit: Int!) {
  search(textQuery: $textQuery, limit: $limit) {
    itemId
    title
    url
    optionId
    colourVariantId
    superCategory
    department
    keySection
    preferredCategory
  }
}";

const CATEGORY_SEARCH: &str = "\
query Search($textQuery: String!, $categoryIds: [String!], $limit: Int!) {
  search(textQuery: $textQuery, categoryIds: $categoryIds, limit: $limit) {
    itemId
    title
    url
    optionId
    colourVariantId
    superCategory
    department
    keySection
    preferredCategory
  }
}";

const ITEM_RECOMMENDATIONS: &str = "\
query ItemRecommendations($itemId: String!, $limit: Int!) {
  itemRecommendations(itemId: $itemId, limit: $limit) {
    itemId
    title
    url
    optionId
    colourVariantId
    superCategory
    department
    keySection
    preferredCategory
  }
}";

/// A ready-to-send upstream request: the GraphQL document, the variables
/// object, and the root field of `data` the results are expected under.
/// Built fresh per call, never persisted.
#[derive(Debug)]
pub struct UpstreamQuery {
    pub document: &'static str,
    pub root_field: &'static str,
    pub variables: Value,
}

impl UpstreamQuery {
    /// Generic text search, used for the URL intent after slug extraction.
    #[must_use]
    pub fn text_search(text_query: &str, limit: u32) -> Self {
        Self {
            document: TEXT_SEARCH,
            root_field: "search",
            variables: json!({
                "textQuery": text_query,
                "limit": limit,
            }),
        }
    }

    /// Free-text search with an optional category scope.
    ///
    /// `categoryIds` is a single-element list built from `category`, or an
    /// explicit null when no category is given. Category names are passed
    /// through verbatim; no name-to-id resolution happens here.
    #[must_use]
    pub fn nlp_search(query: &str, category: Option<&str>, limit: u32) -> Self {
        let category_ids: Option<Vec<&str>> = category.map(|c| vec![c]);
        Self {
            document: CATEGORY_SEARCH,
            root_field: "search",
            variables: json!({
                "textQuery": query,
                "categoryIds": category_ids,
                "limit": limit,
            }),
        }
    }

    /// Recommendations for a known item identifier.
    #[must_use]
    pub fn item_recommendations(item_id: &str, limit: u32) -> Self {
        Self {
            document: ITEM_RECOMMENDATIONS,
            root_field: "itemRecommendations",
            variables: json!({
                "itemId": item_id,
                "limit": limit,
            }),
        }
    }
}
