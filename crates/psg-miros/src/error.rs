use thiserror::Error;

/// Errors returned by the Miros API client.
#[derive(Debug, Error)]
pub enum MirosError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status; the body is kept as
    /// diagnostic detail.
    #[error("unexpected HTTP status {status} from Miros API: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Transport succeeded but the GraphQL payload carried an `errors` array.
    #[error("Miros API errors: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
