//! Response shapes for the weather endpoints

use serde::{Deserialize, Serialize};

use super::{BeaufortScale, BigTendency, Tendency};

/// Current weather conditions for a city
///
/// Fields the provider did not report are passed through as nulls; the
/// current-weather path never substitutes defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeatherDto {
    /// Weather description, e.g. "Clear sky"
    pub description: Option<String>,
    /// Temperature in °C
    pub temperature: Option<f64>,
    /// Wind speed in m/s
    pub wind_speed: Option<f64>,
    /// Relative humidity in %
    pub humidity: Option<i32>,
}

/// Forecast summary comparing the earliest day of the window against the
/// average of the remaining days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecastDto {
    /// Trend of the combined temperature/pressure comfort score
    pub global_tendency: Tendency,
    pub temperature_tendency: Tendency,
    /// Pressure trend, flagged big beyond the configured significance delta
    pub pressure_tendency: BigTendency,
    /// Average wind over the comparison days, on the Beaufort scale
    pub wind_average: BeaufortScale,
}
