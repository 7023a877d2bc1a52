#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use cep_weather::api::handlers::{
    health_handler, weather_by_cep_handler, weather_by_zipcode_handler,
};
use cep_weather::application::services::{CepWeatherService, CityWeatherService};
use cep_weather::domain::upstreams::{LocationResolver, WeatherGateway, WeatherProvider};
use cep_weather::domain::{CurrentWeather, LookupError, TraceContext, WeatherReading};
use cep_weather::state::AppState;

/// Canned CEP weather upstream keyed by postal code.
///
/// - `12345678` - 200 with a fixed reading
/// - `99999999` - unknown postal code
/// - anything else - upstream server error
pub struct StubGateway;

#[async_trait]
impl WeatherGateway for StubGateway {
    async fn current_by_cep(
        &self,
        cep: &str,
        _trace: &TraceContext,
    ) -> Result<WeatherReading, LookupError> {
        match cep {
            "12345678" => Ok(WeatherReading {
                temp_c: 25.5,
                temp_f: 77.9,
                temp_k: 298.65,
            }),
            "99999999" => Err(LookupError::ZipcodeNotFound),
            _ => Err(LookupError::UpstreamStatus(
                "500 Internal Server Error".to_string(),
            )),
        }
    }
}

/// Canned geocoder keyed by postal code.
///
/// - `12345678` - resolves to São Paulo
/// - `40000000` - resolves to a city the stub provider fails on
/// - `99999999` - unknown postal code
/// - anything else - geocoder status failure
pub struct StubResolver;

#[async_trait]
impl LocationResolver for StubResolver {
    async fn resolve_city(&self, cep: &str) -> Result<String, LookupError> {
        match cep {
            "12345678" => Ok("São Paulo".to_string()),
            "40000000" => Ok("Salvador".to_string()),
            "99999999" => Err(LookupError::ZipcodeNotFound),
            _ => Err(LookupError::LocationFetch),
        }
    }
}

/// Canned weather provider keyed by city name.
pub struct StubProvider;

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, LookupError> {
        match city {
            "São Paulo" => Ok(CurrentWeather {
                temp_c: 25.5,
                temp_f: 77.9,
            }),
            _ => Err(LookupError::WeatherFetch),
        }
    }
}

pub fn create_test_state() -> AppState {
    let cep_weather = Arc::new(CepWeatherService::new(Arc::new(StubGateway)));
    let city_weather = Arc::new(CityWeatherService::new(
        Arc::new(StubResolver),
        Arc::new(StubProvider),
    ));

    AppState::new(cep_weather, city_weather, "test-request")
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/weather", post(weather_by_cep_handler))
        .route("/weather/{zipcode}", get(weather_by_zipcode_handler))
        .with_state(state)
}
