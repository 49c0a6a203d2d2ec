//! Application configuration module
//!
//! Provides the process-wide configuration for the front end. It is built
//! once at startup (see `backend::server::config::load_config`) and shared
//! read-only by every handler.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default upstream API version prefix
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default static asset root
pub const DEFAULT_STATIC_ROOT: &str = "public";

/// Default timeout for a single upstream call
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse a `NODE_ENV` / `APP_ENV` style value. Anything other than
    /// `production` is treated as development.
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API base, without trailing slash (e.g. `https://api.example.com`)
    pub api_endpoint: String,
    /// Upstream API version prefix (e.g. `v1` or `web-api/v1`)
    pub api_version: String,
    /// Listening port
    pub port: u16,
    /// Deployment mode
    pub environment: Environment,
    /// Root directory for static assets and uploaded artworks
    pub static_root: PathBuf,
    /// Secret used to sign access grants; plain grants when `None`
    pub grant_secret: Option<String>,
    /// Timeout for a single upstream call
    pub api_timeout: Duration,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Base URL every upstream path is appended to
    pub fn api_base(&self) -> String {
        format!("{}/{}", self.api_endpoint, self.api_version)
    }

    /// Directory holding uploaded artworks
    pub fn artworks_dir(&self) -> PathBuf {
        self.static_root.join("artworks")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_endpoint)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.api_endpoint, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.api_endpoint
            )));
        }
        if self.api_version.is_empty() {
            return Err(ConfigError::MissingValue("API_VERSION"));
        }
        if matches!(&self.grant_secret, Some(secret) if secret.is_empty()) {
            return Err(ConfigError::MissingValue("ACCESS_GRANT_SECRET"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_endpoint: Option<String>,
    api_version: Option<String>,
    port: Option<u16>,
    environment: Environment,
    static_root: Option<PathBuf>,
    grant_secret: Option<String>,
    api_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the upstream API endpoint
    pub fn api_endpoint(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint = Some(url.into());
        self
    }

    /// Set the upstream API version prefix
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn static_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_root = Some(root.into());
        self
    }

    /// Enable signed access grants
    pub fn grant_secret(mut self, secret: impl Into<String>) -> Self {
        self.grant_secret = Some(secret.into());
        self
    }

    pub fn api_timeout(mut self, timeout: Duration) -> Self {
        self.api_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    ///
    /// Slashes at the seams of endpoint and version are stripped so that
    /// `api_base()` always joins them with exactly one.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_endpoint = self
            .api_endpoint
            .ok_or(ConfigError::MissingValue("API_ENDPOINT"))?
            .trim()
            .trim_end_matches('/')
            .to_string();
        let api_version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
            .trim()
            .trim_matches('/')
            .to_string();

        let config = AppConfig {
            api_endpoint,
            api_version,
            port: self.port.unwrap_or(DEFAULT_PORT),
            environment: self.environment,
            static_root: self
                .static_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_ROOT)),
            grant_secret: self.grant_secret,
            api_timeout: self.api_timeout.unwrap_or(DEFAULT_API_TIMEOUT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
