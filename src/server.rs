//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream clients into the pipeline services and runs the Axum
//! server until shutdown.

use crate::application::services::{CepWeatherService, CityWeatherService};
use crate::config::Config;
use crate::infrastructure::http::{
    self, HttpWeatherGateway, ViaCepResolver, WeatherApiClient,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - One shared upstream HTTP client with the configured timeout
/// - The CEP gateway, geocoder, and weather provider clients
/// - Both lookup pipeline services
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if a configured URL does not parse, the client cannot
/// be built, the bind fails, or the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let timeout = Duration::from_secs(config.request_timeout_seconds);
    let client = http::build_client(timeout).context("Failed to build upstream HTTP client")?;

    let external_call_url = Url::parse(&config.external_call_url)?;
    let viacep_base_url = Url::parse(&config.viacep_base_url)?;
    let weatherapi_base_url = Url::parse(&config.weatherapi_base_url)?;

    let gateway = Arc::new(HttpWeatherGateway::new(external_call_url, client.clone()));
    let resolver = Arc::new(ViaCepResolver::new(viacep_base_url, client.clone()));
    let provider = Arc::new(WeatherApiClient::new(
        weatherapi_base_url,
        config.weather_api_key.clone(),
        client,
    ));

    let cep_weather = Arc::new(CepWeatherService::new(gateway));
    let city_weather = Arc::new(CityWeatherService::new(resolver, provider));

    let state = AppState::new(cep_weather, city_weather, &config.request_name);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
