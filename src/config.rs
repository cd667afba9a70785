//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! response bodies, HTTP cache TTLs, logging format, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Response Bodies
// =============================================================================

/// Greeting returned by `GET /`. Served verbatim, byte-for-byte.
pub const GREETING_BODY: &str = "Hello, I am Miguel Caicedo 👋";

/// Body returned by `GET /health`. Liveness probes match on this exact string.
pub const HEALTH_BODY: &str = "ok";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs). All values are in seconds. Directives used:
// - max-age: How long the response is considered fresh
// - stale-while-revalidate: Serve stale while fetching fresh in background
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html
// - RFC 5861 (stale-* extensions): https://httpwg.org/specs/rfc5861.html

/// Greeting page - content is constant, but keep the TTL short so a redeploy
/// with a new message propagates quickly
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR
);

/// Health checks must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file at the built-in default path is not an error: the
    /// service runs fine with defaults. An explicitly provided path that
    /// does not exist is reported as an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() && path == Path::new(DEFAULT_CONFIG_PATH) {
            return Ok(AppConfig::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}'. Expected \"text\" or \"json\"",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
