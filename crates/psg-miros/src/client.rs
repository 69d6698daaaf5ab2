//! HTTP client for the Miros GraphQL API.
//!
//! Posts `{query, variables}` bodies with bearer authentication and an
//! integration identifier. A non-success transport status is surfaced with
//! the response body as diagnostic detail; a success response whose payload
//! carries an `errors` array is surfaced as [`MirosError::Api`] — that check
//! is explicit and not implied by the transport status.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::MirosError;
use crate::query::UpstreamQuery;
use crate::types::{GraphqlRequest, GraphqlResponse, UpstreamRecord};

const INTEGRATION_ID_HEADER: &str = "X-Integration-Id";

/// Client for the Miros GraphQL API.
///
/// Holds the HTTP client, endpoint URL, API key, and integration id. Use
/// [`MirosClient::new`] in production; point `endpoint` at a mock server in
/// tests.
pub struct MirosClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    integration_id: String,
}

impl MirosClient {
    /// Creates a new client for the given endpoint.
    ///
    /// `timeout_secs` bounds each upstream call; expiry surfaces as
    /// [`MirosError::Http`].
    ///
    /// # Errors
    ///
    /// Returns [`MirosError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MirosError::Api`] if `endpoint` is not a
    /// valid URL.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        integration_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, MirosError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("psg/0.1 (product-search-gateway)")
            .build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| MirosError::Api(format!("invalid endpoint URL '{endpoint}': {e}")))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_owned(),
            integration_id: integration_id.to_owned(),
        })
    }

    /// Executes an [`UpstreamQuery`] and returns the records found under its
    /// root field.
    ///
    /// A missing or non-array root field yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`MirosError::Http`] on network failure or timeout.
    /// - [`MirosError::UnexpectedStatus`] on a non-2xx response, carrying the
    ///   body.
    /// - [`MirosError::Api`] when the payload contains a non-empty `errors`
    ///   array.
    /// - [`MirosError::Deserialize`] if the body is not a GraphQL envelope.
    pub async fn execute(&self, query: &UpstreamQuery) -> Result<Vec<UpstreamRecord>, MirosError> {
        let body = GraphqlRequest {
            query: query.document,
            variables: &query.variables,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(INTEGRATION_ID_HEADER, self.integration_id.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(MirosError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GraphqlResponse =
            serde_json::from_str(&text).map_err(|e| MirosError::Deserialize {
                context: format!("{}(endpoint={})", query.root_field, self.endpoint),
                source: e,
            })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            return Err(MirosError::Api(Value::Array(errors).to_string()));
        }

        Ok(extract_records(envelope.data, query.root_field))
    }
}

/// Pulls the record array out of `data` under `root_field`.
fn extract_records(data: Option<Value>, root_field: &str) -> Vec<UpstreamRecord> {
    let Some(Value::Array(items)) = data.and_then(|mut data| data.get_mut(root_field).map(Value::take))
    else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record),
            _ => None,
        })
        .collect()
}
