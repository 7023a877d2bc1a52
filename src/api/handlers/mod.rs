//! HTTP request handlers for the service endpoints.

pub mod health;
pub mod weather_by_cep;
pub mod weather_by_zipcode;

pub use health::health_handler;
pub use weather_by_cep::weather_by_cep_handler;
pub use weather_by_zipcode::weather_by_zipcode_handler;
