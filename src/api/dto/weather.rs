//! DTOs for the weather lookup endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the CEP lookup endpoint.
///
/// `cep` is deliberately loosely typed: the contract accepts any JSON value
/// and rejects non-string shapes inside the pipeline with an "invalid
/// zipcode" input error, not a deserialization failure. A missing field
/// defaults to `null`, which takes the same path.
#[derive(Debug, Deserialize)]
pub struct CepLookupRequest {
    #[serde(default)]
    pub cep: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_json_shape_deserializes() {
        let req: CepLookupRequest = serde_json::from_str(r#"{"cep": "12345678"}"#).unwrap();
        assert_eq!(req.cep, Value::String("12345678".into()));

        let req: CepLookupRequest = serde_json::from_str(r#"{"cep": 12345678}"#).unwrap();
        assert!(req.cep.is_number());

        let req: CepLookupRequest = serde_json::from_str("{}").unwrap();
        assert!(req.cep.is_null());
    }
}
