//! # CEP Weather Service
//!
//! An HTTP service that resolves Brazilian 8-digit postal codes (CEP) to
//! current temperature readings, built with Axum.
//!
//! ## Architecture
//!
//! Two independent, stateless lookup pipelines behind one router:
//!
//! - **CEP lookup** (`POST /weather`) - validates the loosely-typed postal
//!   code and forwards a trace-propagated request to a configured weather
//!   upstream, returning its Celsius/Fahrenheit/Kelvin triple verbatim.
//! - **City lookup** (`GET /weather/{zipcode}`) - geocodes the postal code
//!   to a city via ViaCEP, queries WeatherAPI for that city, and derives
//!   Kelvin from Celsius.
//!
//! Layer separation follows Clean Architecture:
//!
//! - **Domain Layer** ([`domain`]) - Postal-code/temperature types, failure
//!   taxonomy, and upstream capability traits
//! - **Application Layer** ([`application`]) - The two pipeline services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest upstream clients
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export WEATHER_API_KEY="..."
//! export EXTERNAL_CALL_URL="http://weather-upstream:8080/weather"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CepWeatherService, CityWeatherService};
    pub use crate::domain::{
        CurrentWeather, LookupError, PostalCodeInput, TemperatureMap, TraceContext, WeatherReading,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
