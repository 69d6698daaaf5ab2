//! Client for the Miros GraphQL search API.
//!
//! Wraps `reqwest` with Miros-specific error handling, bearer-key and
//! integration-id headers, and normalization of the loosely-typed records the
//! API returns. The GraphQL documents live in [`query`]; [`normalize`] maps
//! each upstream record into the fixed eight-field [`NormalizedItem`] shape
//! regardless of which naming convention the API used.

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::MirosClient;
pub use error::MirosError;
pub use normalize::{normalize_item, NormalizedItem};
pub use query::UpstreamQuery;
pub use types::UpstreamRecord;
