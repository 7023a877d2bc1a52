//! Lookup pipeline services for the application layer.

pub mod cep_weather;
pub mod city_weather;

pub use cep_weather::CepWeatherService;
pub use city_weather::CityWeatherService;
