//! Weather lookup via geocoding and a city-keyed provider.

use std::sync::Arc;

use crate::domain::error::LookupError;
use crate::domain::postal_code::is_valid_postal_code;
use crate::domain::temperature::TemperatureMap;
use crate::domain::upstreams::{LocationResolver, WeatherProvider};
use tracing::{debug, warn};

/// Two-hop lookup pipeline: postal code to city, city to weather.
///
/// The provider holds its own API key; this service only chains the calls
/// and derives the Kelvin reading from Celsius.
pub struct CityWeatherService {
    resolver: Arc<dyn LocationResolver>,
    provider: Arc<dyn WeatherProvider>,
}

impl CityWeatherService {
    /// Creates a new city lookup service.
    pub fn new(resolver: Arc<dyn LocationResolver>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { resolver, provider }
    }

    /// Resolves a postal code to normalized Celsius/Fahrenheit/Kelvin
    /// readings.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidZipcode`] for badly formatted input.
    /// Resolver and provider failures propagate unchanged, including
    /// [`LookupError::ZipcodeNotFound`] when the geocoder does not know the
    /// postal code.
    pub async fn lookup(&self, zipcode: &str) -> Result<TemperatureMap, LookupError> {
        if !is_valid_postal_code(zipcode) {
            warn!(zipcode, "invalid zipcode format");
            return Err(LookupError::InvalidZipcode);
        }

        let city = self.resolver.resolve_city(zipcode).await?;
        debug!(zipcode, city, "resolved postal code");

        let weather = self.provider.current_by_city(&city).await?;

        Ok(TemperatureMap::from(weather))
    }
}
