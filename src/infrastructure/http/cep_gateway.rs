//! reqwest implementation of the CEP-keyed weather upstream.

use async_trait::async_trait;
use http::HeaderMap;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::domain::error::LookupError;
use crate::domain::temperature::WeatherReading;
use crate::domain::trace::TraceContext;
use crate::domain::upstreams::WeatherGateway;
use crate::infrastructure::http::join_url;

/// Weather upstream client issuing `GET {base_url}/{cep}` with the caller's
/// trace context injected into the outbound headers.
pub struct HttpWeatherGateway {
    base_url: Url,
    http: Client,
}

impl HttpWeatherGateway {
    /// Creates a gateway for the configured upstream base URL.
    pub fn new(base_url: Url, http: Client) -> Self {
        Self { base_url, http }
    }
}

/// Status line in the `{code} {reason}` form upstream messages carry.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[async_trait]
impl WeatherGateway for HttpWeatherGateway {
    async fn current_by_cep(
        &self,
        cep: &str,
        trace: &TraceContext,
    ) -> Result<WeatherReading, LookupError> {
        let url = join_url(&self.base_url, cep);

        let mut headers = HeaderMap::new();
        trace.inject(&mut headers);

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to fetch weather data: {e}")))?;

        match response.status() {
            StatusCode::OK => response
                .json::<WeatherReading>()
                .await
                .map_err(|e| LookupError::Decode(format!("failed to decode weather data: {e}"))),
            StatusCode::NOT_FOUND => Err(LookupError::ZipcodeNotFound),
            status => Err(LookupError::UpstreamStatus(status_line(status))),
        }
    }
}
