/**
 * Server Configuration
 *
 * Loads `AppConfig` from environment variables (a `.env` file is applied
 * by the binary before this runs).
 *
 * # Variables
 *
 * - `API_ENDPOINT` - required, absolute http(s) URL of the booking backend
 * - `API_VERSION` - version prefix, default `v1`
 * - `PORT` - listening port, default `3000`
 * - `NODE_ENV` / `APP_ENV` - `production` enables `Secure` cookies
 * - `STATIC_ROOT` - static asset directory, default `public`
 * - `ACCESS_GRANT_SECRET` - enables signed access grants
 * - `API_TIMEOUT_SECS` - upstream call timeout, default `30`
 *
 * # Error Handling
 *
 * Unlike optional services, a broken configuration stops startup: without
 * a backend endpoint no page can be served.
 */
use std::time::Duration;

use crate::shared::config::{AppConfig, ConfigError, Environment};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Build the configuration from an arbitrary variable lookup
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| non_empty(lookup(key));

    let mut builder = AppConfig::builder();

    if let Some(endpoint) = get("API_ENDPOINT") {
        builder = builder.api_endpoint(endpoint);
    }
    if let Some(version) = get("API_VERSION") {
        builder = builder.api_version(version);
    }
    if let Some(port) = get("PORT") {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        builder = builder.port(port);
    }
    if let Some(mode) = get("NODE_ENV").or_else(|| get("APP_ENV")) {
        builder = builder.environment(Environment::from_env_value(&mode));
    }
    if let Some(root) = get("STATIC_ROOT") {
        builder = builder.static_root(root);
    }
    if let Some(secret) = get("ACCESS_GRANT_SECRET") {
        builder = builder.grant_secret(secret);
    }
    if let Some(secs) = get("API_TIMEOUT_SECS") {
        let secs = secs
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "API_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
        builder = builder.api_timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Load the configuration from the process environment
///
/// # Example
///
/// ```rust,no_run
/// use spotbook::backend::server::config::load_config;
///
/// let config = load_config().expect("invalid configuration");
/// println!("proxying {}", config.api_base());
/// ```
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = config_from_lookup(|key| std::env::var(key).ok())?;
    tracing::info!(
        "Configuration loaded: backend {}, static root {}, {:?} mode, {} access grants",
        config.api_base(),
        config.static_root.display(),
        config.environment,
        if config.grant_secret.is_some() { "signed" } else { "plain" }
    );
    Ok(config)
}
