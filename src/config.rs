//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Only `DATABASE_URL` is mandatory;
//! everything else has a default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default chat completion endpoint (OpenRouter, OpenAI-compatible).
pub const DEFAULT_AI_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Configuration loading failures. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set (or is blank).
    #[error("{0} not set")]
    Missing(&'static str),

    /// `HOST` / `PORT` do not form a valid socket address.
    #[error("invalid listen address {value:?}: {reason}")]
    InvalidListenAddr {
        /// The offending `HOST:PORT` text.
        value: String,
        /// Parser error message.
        reason: String,
    },
}

/// Execution mode selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Any value other than `production`.
    Development,
    /// `APP_ENV=production`: enables the `/api` rate limiter.
    Production,
}

impl RunMode {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Returns `true` in production mode.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Storage connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Timeout for acquiring a pooled connection.
    pub connect_timeout: Duration,
}

/// `/api` rate limiter settings (only applied in production).
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Requests allowed per client per window.
    pub max_requests: u32,
    /// Fixed window length.
    pub window: Duration,
}

/// Completion API settings for `/api/ai`.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API credential. `None` degrades `/api/ai` to a static message.
    pub api_key: Option<String>,
    /// Chat completion endpoint.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Public URL of this site, sent as `HTTP-Referer`.
    pub app_url: String,
    /// Application name, sent as `X-Title`.
    pub app_title: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_AI_API_URL.to_string(),
            model: "openai/gpt-oss-20b:free".to_string(),
            max_tokens: 8000,
            app_url: "http://localhost:3000".to_string(),
            app_title: "DevOps Mini Blog".to_string(),
        }
    }
}

/// Static asset directories.
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    /// Served under `/public` and as the router fallback.
    pub public_dir: PathBuf,
    /// Third-party browser libraries, served under `/vendor`.
    pub vendor_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            vendor_dir: PathBuf::from("vendor"),
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Execution mode.
    pub run_mode: RunMode,
    /// Storage settings.
    pub database: DatabaseConfig,
    /// Rate limiter settings.
    pub rate_limit: RateLimitConfig,
    /// Completion API settings.
    pub ai: AiConfig,
    /// Static asset directories.
    pub assets: AssetsConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `DATABASE_URL` is not set and
    /// [`ConfigError::InvalidListenAddr`] if `HOST`/`PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. Invalid numeric values fall back
    /// to their defaults.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = get("PORT").unwrap_or_else(|| "3000".to_string());
        let listen_addr = parse_listen_addr(&host, &port)?;

        let url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database = DatabaseConfig {
            url,
            max_connections: parse_nonzero_or(get("DATABASE_MAX_CONNECTIONS"), 10),
            connect_timeout: Duration::from_secs(parse_or(
                get("DATABASE_CONNECT_TIMEOUT_SECS"),
                5,
            )),
        };

        let rate_limit = RateLimitConfig {
            max_requests: parse_nonzero_or(get("RATE_LIMIT_MAX_REQUESTS"), 10),
            window: Duration::from_secs(parse_nonzero_or(get("RATE_LIMIT_WINDOW_SECS"), 60)),
        };

        let defaults = AiConfig::default();
        let ai = AiConfig {
            api_key: get("AI_API_KEY"),
            api_url: get("AI_API_URL").unwrap_or(defaults.api_url),
            model: get("AI_MODEL").unwrap_or(defaults.model),
            max_tokens: parse_or(get("AI_MAX_TOKENS"), defaults.max_tokens),
            app_url: get("APP_URL").unwrap_or(defaults.app_url),
            app_title: get("AI_APP_TITLE").unwrap_or(defaults.app_title),
        };

        let asset_defaults = AssetsConfig::default();
        let assets = AssetsConfig {
            public_dir: get("PUBLIC_DIR").map_or(asset_defaults.public_dir, PathBuf::from),
            vendor_dir: get("VENDOR_DIR").map_or(asset_defaults.vendor_dir, PathBuf::from),
        };

        Ok(Self {
            listen_addr,
            run_mode: RunMode::parse(get("APP_ENV").as_deref()),
            database,
            rate_limit,
            ai,
            assets,
        })
    }
}

fn parse_listen_addr(host: &str, port: &str) -> Result<SocketAddr, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidListenAddr {
        value: format!("{host}:{port}"),
        reason,
    };
    let ip: IpAddr = host.parse().map_err(|e| invalid(format!("{e}")))?;
    let port: u16 = port.parse().map_err(|e| invalid(format!("{e}")))?;
    Ok(SocketAddr::new(ip, port))
}

/// Parses an optional value as `T`, returning `default` on missing or
/// invalid input.
fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "invalid numeric setting, using default");
            default
        }),
        None => default,
    }
}

/// Like [`parse_or`], but zero also falls back to `default`.
fn parse_nonzero_or<T>(value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Default + PartialEq + Copy + std::fmt::Display,
{
    let parsed = parse_or(value, default);
    if parsed == T::default() {
        tracing::warn!(default = %default, "zero is not a valid setting, using default");
        return default;
    }
    parsed
}
