//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `WEATHER_API_KEY` - API key for the city weather provider
//! - `EXTERNAL_CALL_URL` - base URL of the CEP-keyed weather upstream,
//!   path-joined with the postal code
//!
//! ## Optional Variables
//!
//! - `REQUEST_NAME_OTEL` - span name for CEP lookups (default: `cep-lookup`)
//! - `VIACEP_BASE_URL` / `WEATHERAPI_BASE_URL` - upstream base URL
//!   overrides (defaults: production endpoints)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT_SECONDS` - upstream call timeout (default: 10)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::infrastructure::http::{viacep, weather_api};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the city weather provider (`WEATHER_API_KEY`).
    pub weather_api_key: String,
    /// Base URL of the CEP-keyed weather upstream (`EXTERNAL_CALL_URL`).
    pub external_call_url: String,
    /// Span name recorded for CEP lookups (`REQUEST_NAME_OTEL`).
    pub request_name: String,
    pub viacep_base_url: String,
    pub weatherapi_base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Per-request timeout for upstream calls, in seconds
    /// (`REQUEST_TIMEOUT_SECONDS`, default: 10). The source system had no
    /// timeout at all; one is applied here to bound stuck upstream calls.
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;
        let external_call_url =
            env::var("EXTERNAL_CALL_URL").context("EXTERNAL_CALL_URL must be set")?;

        let request_name =
            env::var("REQUEST_NAME_OTEL").unwrap_or_else(|_| "cep-lookup".to_string());

        let viacep_base_url = env::var("VIACEP_BASE_URL")
            .unwrap_or_else(|_| viacep::DEFAULT_BASE_URL.to_string());
        let weatherapi_base_url = env::var("WEATHERAPI_BASE_URL")
            .unwrap_or_else(|_| weather_api::DEFAULT_BASE_URL.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            weather_api_key,
            external_call_url,
            request_name,
            viacep_base_url,
            weatherapi_base_url,
            listen_addr,
            log_level,
            log_format,
            request_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API key is empty
    /// - any upstream base URL is not a valid http(s) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - the request timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.weather_api_key.is_empty() {
            anyhow::bail!("WEATHER_API_KEY must not be empty");
        }

        for (name, value) in [
            ("EXTERNAL_CALL_URL", &self.external_call_url),
            ("VIACEP_BASE_URL", &self.viacep_base_url),
            ("WEATHERAPI_BASE_URL", &self.weatherapi_base_url),
        ] {
            let url = Url::parse(value)
                .with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, value);
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  CEP weather upstream: {}", self.external_call_url);
        tracing::info!("  Geocoder: {}", self.viacep_base_url);
        tracing::info!("  Weather provider: {}", self.weatherapi_base_url);
        tracing::info!("  Weather API key: {}", mask_api_key(&self.weather_api_key));
        tracing::info!("  Request name: {}", self.request_name);
        tracing::info!("  Upstream timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks an API key for logging, keeping only the first four characters.
fn mask_api_key(key: &str) -> String {
    if key.len() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", &key[..4])
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
