use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default Miros GraphQL endpoint, overridable via `MIROS_API_URL`.
const DEFAULT_MIROS_API_URL: &str = "https://api.miros.services/graphql";

/// Default integration identifier sent as `X-Integration-Id` on every
/// upstream call, overridable via `MIROS_INTEGRATION_ID`.
const DEFAULT_MIROS_INTEGRATION_ID: &str = "fb97f7d4-fe95-402f-a81a-402cb062eaa3";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `MIROS_API_KEY` is missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if `MIROS_API_KEY` is missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let miros_api_key = require("MIROS_API_KEY")?;

    let env = parse_environment(&or_default("PSG_ENV", "development"));
    let bind_addr = parse_addr("PSG_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PSG_LOG_LEVEL", "info");

    let miros_api_url = or_default("MIROS_API_URL", DEFAULT_MIROS_API_URL);
    let miros_integration_id =
        or_default("MIROS_INTEGRATION_ID", DEFAULT_MIROS_INTEGRATION_ID);
    let miros_request_timeout_secs = parse_u64("MIROS_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        miros_api_url,
        miros_api_key,
        miros_integration_id,
        miros_request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MIROS_API_KEY", "test-api-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MIROS_API_KEY"),
            "expected MissingEnvVar(MIROS_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("PSG_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PSG_BIND_ADDR"),
            "expected InvalidEnvVar(PSG_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map = full_env();
        map.insert("MIROS_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIROS_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MIROS_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_only_api_key() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.miros_api_key, "test-api-key");
        assert_eq!(cfg.miros_api_url, DEFAULT_MIROS_API_URL);
        assert_eq!(cfg.miros_integration_id, DEFAULT_MIROS_INTEGRATION_ID);
        assert_eq!(cfg.miros_request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = full_env();
        map.insert("MIROS_API_URL", "https://staging.miros.services/graphql");
        map.insert("MIROS_INTEGRATION_ID", "11111111-2222-3333-4444-555555555555");
        map.insert("MIROS_REQUEST_TIMEOUT_SECS", "5");
        map.insert("PSG_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.miros_api_url, "https://staging.miros.services/graphql");
        assert_eq!(
            cfg.miros_integration_id,
            "11111111-2222-3333-4444-555555555555"
        );
        assert_eq!(cfg.miros_request_timeout_secs, 5);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("test-api-key"), "api key leaked: {debug}");
        assert!(debug.contains("[redacted]"));
    }
}
