//! Domain layer containing the postal-code and weather vocabulary.
//!
//! This module defines the core types and upstream contracts independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`postal_code`] - Postal-code input modeling and format validation
//! - [`temperature`] - Temperature readings and unit derivation
//! - [`trace`] - W3C trace-context header carrier
//! - [`error`] - Pipeline failure taxonomy
//! - [`upstreams`] - Upstream capability trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on axum or reqwest; header handling
//!   goes through the shared `http` types
//! - Upstream traits define contracts implemented by the infrastructure layer
//! - Pipeline logic is encapsulated in services (see [`crate::application::services`])

pub mod error;
pub mod postal_code;
pub mod temperature;
pub mod trace;
pub mod upstreams;

pub use error::LookupError;
pub use postal_code::{PostalCodeInput, is_valid_postal_code};
pub use temperature::{CurrentWeather, TemperatureMap, WeatherReading};
pub use trace::TraceContext;
