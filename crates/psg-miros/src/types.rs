//! Miros GraphQL wire types.
//!
//! The API wraps every reply in a `{"data": ..., "errors": ...}` envelope;
//! [`GraphqlResponse`] captures that. Individual result records are kept as
//! raw JSON maps because Miros does not guarantee a stable naming convention
//! for record fields — see [`crate::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record returned by the API; no shape invariant beyond being a
/// key-value mapping.
pub type UpstreamRecord = serde_json::Map<String, Value>;

/// Request body for a GraphQL call: `{"query": ..., "variables": ...}`.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Value,
}

/// Top-level envelope for all Miros GraphQL responses.
///
/// A successful transport response may still carry application-level
/// failures in `errors`; callers must check it explicitly before trusting
/// `data`.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}
