//! WeatherAPI implementation of the city-keyed weather provider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::domain::error::LookupError;
use crate::domain::temperature::CurrentWeather;
use crate::domain::upstreams::WeatherProvider;
use crate::infrastructure::http::join_url;

/// Production WeatherAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com";

/// Provider client issuing `GET {base_url}/v1/current.json?key={key}&q={city}`.
pub struct WeatherApiClient {
    base_url: Url,
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    /// Creates a provider client holding its API key explicitly.
    pub fn new(base_url: Url, api_key: String, http: Client) -> Self {
        Self {
            base_url,
            api_key,
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherApiBody {
    current: CurrentWeather,
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, LookupError> {
        let url = join_url(&self.base_url, "v1/current.json");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to fetch weather data: {e}")))?;

        if response.status() != StatusCode::OK {
            return Err(LookupError::WeatherFetch);
        }

        let body: WeatherApiBody = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(format!("failed to decode weather data: {e}")))?;

        Ok(body.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client(server: &MockServer) -> WeatherApiClient {
        let base = Url::parse(&server.uri()).unwrap();
        WeatherApiClient::new(base, "test-key".to_string(), Client::new())
    }

    #[tokio::test]
    async fn sends_key_and_city_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .and(query_param("key", "test-key"))
            .and(query_param("q", "São Paulo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": { "temp_c": 25.5, "temp_f": 77.9, "humidity": 60 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let weather = client(&server)
            .await
            .current_by_city("São Paulo")
            .await
            .unwrap();

        assert_eq!(weather.temp_c, 25.5);
        assert_eq!(weather.temp_f, 77.9);
    }

    #[tokio::test]
    async fn non_ok_status_is_a_weather_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .current_by_city("São Paulo")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to fetch weather data");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "location": {} })))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .current_by_city("São Paulo")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode weather data"));
    }
}
