//! Upstream trait for postal-code geocoding.

use crate::domain::error::LookupError;
use async_trait::async_trait;

/// Resolves a postal code to the city it belongs to.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ViaCepResolver`] - ViaCEP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Returns the city name for a validated postal code.
    ///
    /// # Errors
    ///
    /// - [`LookupError::ZipcodeNotFound`] when the provider reports an empty
    ///   city, its signal for an unknown postal code
    /// - [`LookupError::LocationFetch`] on a non-200 status
    /// - [`LookupError::Transport`] / [`LookupError::Decode`] propagated as-is
    async fn resolve_city(&self, cep: &str) -> Result<String, LookupError>;
}
