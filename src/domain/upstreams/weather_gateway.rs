//! Upstream trait for the CEP-keyed weather endpoint.

use crate::domain::error::LookupError;
use crate::domain::temperature::WeatherReading;
use crate::domain::trace::TraceContext;
use async_trait::async_trait;

/// Weather upstream queried directly by postal code.
///
/// The trace context of the inbound request is passed explicitly so the
/// implementation can propagate it onto the outbound hop.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpWeatherGateway`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Fetches the current temperature triple for a validated postal code.
    ///
    /// # Errors
    ///
    /// - [`LookupError::ZipcodeNotFound`] when the upstream answers 404
    /// - [`LookupError::UpstreamStatus`] for any other non-200 status
    /// - [`LookupError::Transport`] when the upstream is unreachable
    /// - [`LookupError::Decode`] when a 200 body fails to parse
    async fn current_by_cep(
        &self,
        cep: &str,
        trace: &TraceContext,
    ) -> Result<WeatherReading, LookupError>;
}
