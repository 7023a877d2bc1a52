//! ViaCEP implementation of the postal-code geocoder.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::domain::error::LookupError;
use crate::domain::upstreams::LocationResolver;
use crate::infrastructure::http::join_url;

/// Production ViaCEP endpoint.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Geocoder client issuing `GET {base_url}/ws/{cep}/json/`.
pub struct ViaCepResolver {
    base_url: Url,
    http: Client,
}

impl ViaCepResolver {
    /// Creates a resolver for the given ViaCEP base URL.
    pub fn new(base_url: Url, http: Client) -> Self {
        Self { base_url, http }
    }
}

/// ViaCEP answers unknown postal codes with `{"erro": true}` and no
/// `localidade` field; the default covers that shape.
#[derive(Debug, Deserialize)]
struct ViaCepBody {
    #[serde(default)]
    localidade: String,
}

#[async_trait]
impl LocationResolver for ViaCepResolver {
    async fn resolve_city(&self, cep: &str) -> Result<String, LookupError> {
        let url = join_url(&self.base_url, &format!("ws/{cep}/json/"));

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(LookupError::LocationFetch);
        }

        let body: ViaCepBody = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        // An empty city name is the provider's signal for "no such postal code".
        if body.localidade.is_empty() {
            return Err(LookupError::ZipcodeNotFound);
        }

        Ok(body.localidade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn resolver(server: &MockServer) -> ViaCepResolver {
        let base = Url::parse(&server.uri()).unwrap();
        ViaCepResolver::new(base, Client::new())
    }

    #[tokio::test]
    async fn resolves_the_city_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/12345678/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cep": "12345-678", "localidade": "São Paulo", "uf": "SP"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let city = resolver(&server)
            .await
            .resolve_city("12345678")
            .await
            .unwrap();

        assert_eq!(city, "São Paulo");
    }

    #[tokio::test]
    async fn empty_city_means_unknown_zipcode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/99999999/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localidade": "" })))
            .mount(&server)
            .await;

        let err = resolver(&server)
            .await
            .resolve_city("99999999")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "can not find zipcode");
    }

    #[tokio::test]
    async fn missing_city_field_means_unknown_zipcode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/99999999/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
            .mount(&server)
            .await;

        let err = resolver(&server)
            .await
            .resolve_city("99999999")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "can not find zipcode");
    }

    #[tokio::test]
    async fn non_ok_status_is_a_location_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/12345678/json/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = resolver(&server)
            .await
            .resolve_city("12345678")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to fetch location");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/12345678/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let err = resolver(&server)
            .await
            .resolve_city("12345678")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)));
    }
}
