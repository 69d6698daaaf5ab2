//! The search dispatcher: validates the inbound intent, routes it to the
//! matching upstream query, and normalizes the results.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use psg_core::intent::{SearchIntent, SearchRequest, ValidatedSearch};
use psg_core::slug;
use psg_miros::{normalize_item, NormalizedItem, UpstreamQuery};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    pub items: Vec<NormalizedItem>,
}

/// POST `/search`.
///
/// Validation failures short-circuit to a 400 naming the missing field
/// before any upstream call. Upstream failures of either kind (transport or
/// GraphQL `errors` payload) become a 500. Results are normalized first and
/// then truncated to the requested limit; upstream is asked for the same
/// limit, the truncation here is defensive.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let ValidatedSearch { intent, limit } = request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(
        request_id = %req_id.0,
        intent = intent_name(&intent),
        limit,
        "received search request"
    );

    let query = match &intent {
        SearchIntent::Url { url } => {
            let text_query = slug::query_from_url(url);
            tracing::debug!(request_id = %req_id.0, %text_query, "derived text query from url");
            UpstreamQuery::text_search(&text_query, limit)
        }
        SearchIntent::Item { item_id } => UpstreamQuery::item_recommendations(item_id, limit),
        SearchIntent::Nlp { query, category } => {
            UpstreamQuery::nlp_search(query, category.as_deref(), limit)
        }
    };

    let records = state.client.execute(&query).await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "upstream search failed");
        ApiError::Upstream {
            error: "failed to fetch search results".to_string(),
            message: e.to_string(),
        }
    })?;

    let mut items: Vec<NormalizedItem> = records.iter().map(normalize_item).collect();
    items.truncate(limit as usize);

    tracing::info!(request_id = %req_id.0, count = items.len(), "returning normalized results");

    Ok(Json(SearchResponse { items }))
}

/// POST `/search/image` — deliberately unimplemented; the body is never read.
pub(super) async fn search_by_image() -> ApiError {
    ApiError::NotImplemented {
        error: "image search not implemented".to_string(),
        message: "image-based search is not supported by this gateway yet".to_string(),
    }
}

fn intent_name(intent: &SearchIntent) -> &'static str {
    match intent {
        SearchIntent::Url { .. } => "url",
        SearchIntent::Item { .. } => "item",
        SearchIntent::Nlp { .. } => "nlp",
    }
}
