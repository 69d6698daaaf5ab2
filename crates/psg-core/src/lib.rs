//! Shared domain types and configuration for the product-search gateway.
//!
//! Holds the inbound intent model ([`intent`]), the URL slug extractor
//! ([`slug`]), and environment-based configuration loading ([`AppConfig`],
//! [`load_app_config`]).

use thiserror::Error;

mod app_config;
mod config;
pub mod intent;
pub mod slug;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value failed to parse.
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
