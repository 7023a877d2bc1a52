//! Pipeline failure taxonomy.

use thiserror::Error;

/// Terminal failure of a postal-code weather lookup.
///
/// Every variant maps to a caller-visible HTTP status at the boundary; no
/// failure is retried internally. Error messages are part of the wire
/// contract (the boundary keys 404 responses off "can not find zipcode"),
/// so `Display` output must stay stable.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The caller supplied a non-string or badly formatted postal code.
    #[error("invalid zipcode")]
    InvalidZipcode,

    /// No upstream could resolve the postal code.
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    /// The geocoding provider answered with an unexpected status.
    #[error("failed to fetch location")]
    LocationFetch,

    /// The CEP weather upstream answered with an unexpected status; the
    /// message carries the HTTP status line.
    #[error("failed to fetch weather data: {0}")]
    UpstreamStatus(String),

    /// The city weather provider answered with an unexpected status.
    #[error("failed to fetch weather data")]
    WeatherFetch,

    /// An upstream returned a malformed payload on a successful status.
    /// The message is formatted at the call site.
    #[error("{0}")]
    Decode(String),

    /// Network-level failure reaching an upstream. The message is formatted
    /// at the call site.
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    /// True when the caller supplied bad data, as opposed to an upstream
    /// dependency failing. The CEP lookup boundary answers 422 for these.
    pub fn is_client_input(&self) -> bool {
        matches!(self, Self::InvalidZipcode)
    }

    /// True when an upstream signalled that the postal code does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ZipcodeNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(LookupError::InvalidZipcode.to_string(), "invalid zipcode");
        assert_eq!(
            LookupError::ZipcodeNotFound.to_string(),
            "can not find zipcode"
        );
        assert_eq!(
            LookupError::LocationFetch.to_string(),
            "failed to fetch location"
        );
        assert_eq!(
            LookupError::WeatherFetch.to_string(),
            "failed to fetch weather data"
        );
        assert_eq!(
            LookupError::UpstreamStatus("500 Internal Server Error".into()).to_string(),
            "failed to fetch weather data: 500 Internal Server Error"
        );
    }

    #[test]
    fn only_invalid_zipcode_is_client_input() {
        assert!(LookupError::InvalidZipcode.is_client_input());

        assert!(!LookupError::ZipcodeNotFound.is_client_input());
        assert!(!LookupError::LocationFetch.is_client_input());
        assert!(!LookupError::WeatherFetch.is_client_input());
        assert!(!LookupError::UpstreamStatus("502 Bad Gateway".into()).is_client_input());
        assert!(!LookupError::Transport("connection refused".into()).is_client_input());
    }

    #[test]
    fn not_found_flag() {
        assert!(LookupError::ZipcodeNotFound.is_not_found());
        assert!(!LookupError::InvalidZipcode.is_not_found());
        assert!(!LookupError::LocationFetch.is_not_found());
    }
}
