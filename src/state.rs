use std::sync::Arc;

use crate::application::services::{CepWeatherService, CityWeatherService};

/// Shared application state injected into every handler.
///
/// Services are stateless, so one instance of each is shared across all
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub cep_weather: Arc<CepWeatherService>,
    pub city_weather: Arc<CityWeatherService>,
    /// Span name for CEP lookups, from `REQUEST_NAME_OTEL`.
    pub request_name: Arc<str>,
}

impl AppState {
    pub fn new(
        cep_weather: Arc<CepWeatherService>,
        city_weather: Arc<CityWeatherService>,
        request_name: &str,
    ) -> Self {
        Self {
            cep_weather,
            city_weather,
            request_name: Arc::from(request_name),
        }
    }
}
