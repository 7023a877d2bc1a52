//! Upstream trait for the city-keyed weather provider.

use crate::domain::error::LookupError;
use crate::domain::temperature::CurrentWeather;
use async_trait::async_trait;

/// Weather provider queried by city name.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::WeatherApiClient`] - WeatherAPI implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for a city.
    ///
    /// # Errors
    ///
    /// - [`LookupError::WeatherFetch`] on a non-200 status
    /// - [`LookupError::Transport`] when the provider is unreachable
    /// - [`LookupError::Decode`] when a 200 body fails to parse
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, LookupError>;
}
