//! Application layer services implementing the lookup pipelines.
//!
//! This layer orchestrates domain operations: input validation, upstream
//! calls through the domain traits, and result mapping. Services consume
//! upstream traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::cep_weather::CepWeatherService`] - Weather lookup via the
//!   CEP-keyed upstream (single hop, trace-propagated)
//! - [`services::city_weather::CityWeatherService`] - Weather lookup via
//!   geocoding followed by a city-keyed provider (two chained hops)

pub mod services;
