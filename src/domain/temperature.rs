//! Temperature readings and unit derivation.

use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Temperature triple returned by the CEP weather upstream.
///
/// All three fields are copied verbatim from the upstream response; nothing
/// is derived on this path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temp_c: f64,
    pub temp_f: f64,
    pub temp_k: f64,
}

/// Current conditions as reported by the city weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub temp_f: f64,
}

/// Normalized temperature result for the city lookup pipeline.
///
/// Celsius and Fahrenheit are copied from the provider; Kelvin is derived
/// as `temp_C + 273.15`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureMap {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<CurrentWeather> for TemperatureMap {
    fn from(weather: CurrentWeather) -> Self {
        Self {
            temp_c: weather.temp_c,
            temp_f: weather.temp_f,
            temp_k: weather.temp_c + KELVIN_OFFSET,
        }
    }
}
