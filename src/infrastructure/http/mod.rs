//! Upstream HTTP client implementations.
//!
//! One shared [`reqwest::Client`] is built at startup with the configured
//! per-request timeout and cloned into every upstream client (cloning a
//! reqwest client reuses the underlying connection pool).

pub mod cep_gateway;
pub mod viacep;
pub mod weather_api;

pub use cep_gateway::HttpWeatherGateway;
pub use viacep::ViaCepResolver;
pub use weather_api::WeatherApiClient;

use std::time::Duration;

/// Builds the shared upstream client with a per-request timeout.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Joins a base URL and a path segment without doubling slashes.
fn join_url(base: &url::Url, suffix: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        suffix.trim_start_matches('/')
    )
}
