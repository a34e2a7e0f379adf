//! Internal weather entities decoded from the provider
//!
//! Wire-level response shapes live in the shared crate; these carry the
//! provider's data through the evaluation pipeline.

use chrono::NaiveDate;

/// A single current-weather observation
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeatherEntity {
    pub description: Option<String>,
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Relative humidity in %
    pub humidity: Option<i32>,
}

/// One day of the daily forecast window
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub date: NaiveDate,
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Pressure in hPa
    pub pressure: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
}
