//! Upstream capability trait definitions.
//!
//! Each trait is a seam between a pipeline and one external HTTP dependency,
//! so tests can substitute the transport without touching pipeline logic.

pub mod location_resolver;
pub mod weather_gateway;
pub mod weather_provider;

pub use location_resolver::LocationResolver;
pub use weather_gateway::WeatherGateway;
pub use weather_provider::WeatherProvider;

#[cfg(test)]
pub use location_resolver::MockLocationResolver;
#[cfg(test)]
pub use weather_gateway::MockWeatherGateway;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
