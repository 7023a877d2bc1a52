//! Postal-code input modeling and format validation.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("postal code pattern is valid"));

/// Returns `true` iff `code` is exactly 8 ASCII decimal digits.
///
/// This is the single format rule shared by both lookup pipelines. No
/// leading or trailing characters are tolerated, including whitespace.
pub fn is_valid_postal_code(code: &str) -> bool {
    POSTAL_CODE_RE.is_match(code)
}

/// Loosely-typed postal code as received on the wire.
///
/// The CEP lookup endpoint accepts any JSON value in its `cep` field; the
/// shape check is an explicit variant match in the pipeline rather than a
/// deserialization failure, so that a non-string value surfaces as an
/// "invalid zipcode" input error instead of a 4xx from the JSON layer.
#[derive(Debug, Clone)]
pub enum PostalCodeInput {
    /// The request carried a JSON string.
    Text(String),
    /// Any other JSON shape (number, null, object, array, bool).
    Other(Value),
}

impl From<Value> for PostalCodeInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}
