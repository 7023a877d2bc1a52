//! Weather lookup keyed directly by postal code.

use std::sync::Arc;

use crate::domain::error::LookupError;
use crate::domain::postal_code::{PostalCodeInput, is_valid_postal_code};
use crate::domain::temperature::WeatherReading;
use crate::domain::trace::TraceContext;
use crate::domain::upstreams::WeatherGateway;
use tracing::warn;

/// Single-upstream lookup pipeline.
///
/// Validates the loosely-typed postal code input and forwards a
/// trace-propagated request to the configured weather upstream. Holds no
/// mutable state; concurrent requests share one instance behind `Arc`.
pub struct CepWeatherService {
    gateway: Arc<dyn WeatherGateway>,
}

impl CepWeatherService {
    /// Creates a new CEP lookup service.
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    /// Resolves a postal code to its current temperature triple.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidZipcode`] when the input is not a JSON
    /// string or is not exactly 8 ASCII digits; these are the only
    /// input-layer failures (`is_client_input() == true`). Every other
    /// failure comes from the gateway and is propagated unchanged.
    pub async fn lookup(
        &self,
        input: PostalCodeInput,
        trace: &TraceContext,
    ) -> Result<WeatherReading, LookupError> {
        let cep = match input {
            PostalCodeInput::Text(cep) => cep,
            PostalCodeInput::Other(value) => {
                warn!(?value, "zipcode is not a string");
                return Err(LookupError::InvalidZipcode);
            }
        };

        if !is_valid_postal_code(&cep) {
            warn!(cep, "invalid zipcode format");
            return Err(LookupError::InvalidZipcode);
        }

        self.gateway.current_by_cep(&cep, trace).await
    }
}
