mod search;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use psg_miros::MirosClient;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<MirosClient>,
}

/// All handler failures converge here and become structured JSON bodies;
/// nothing escapes as an unhandled fault.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete inbound intent; no upstream call was made.
    BadRequest(String),
    /// The upstream call failed, at the transport or application level.
    Upstream { error: String, message: String },
    /// The endpoint exists but is deliberately unimplemented.
    NotImplemented { error: String, message: String },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct DetailedErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            ApiError::Upstream { error, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DetailedErrorBody { error, message }),
            )
                .into_response(),
            ApiError::NotImplemented { error, message } => (
                StatusCode::NOT_IMPLEMENTED,
                Json(DetailedErrorBody { error, message }),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", post(search::search))
        .route("/search/image", post(search::search_by_image))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        message: "product search gateway is running",
        timestamp: Utc::now(),
    })
}
