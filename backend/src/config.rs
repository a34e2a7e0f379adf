//! Configuration management for the weather evaluation API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WEATHER_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::evaluation::ScoringCurve;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weatherbit provider configuration
    pub weatherbit: WeatherbitConfig,

    /// Forecast evaluation configuration
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherbitConfig {
    /// Weatherbit API base URL
    pub base_url: String,

    /// Weatherbit API key
    pub api_key: String,

    /// Number of days requested from the daily forecast endpoint
    pub forecast_days: u32,

    /// Upper bound on a current-weather cache entry's lifetime, in minutes
    pub current_cache_max_minutes: u32,

    /// Maximum number of cities kept per lookup cache
    pub cache_max_entries: usize,
}

/// Reference points for the forecast comfort scoring
#[derive(Debug, Deserialize, Clone)]
pub struct EvaluationConfig {
    pub temperature: ScoringProfileConfig,

    pub pressure: ScoringProfileConfig,

    /// Pressure swing beyond which a tendency counts as big
    pub pressure_big_delta: f64,
}

/// Scoring parameters for one physical quantity
#[derive(Debug, Deserialize, Clone)]
pub struct ScoringProfileConfig {
    /// Score achieved exactly at the optimal value
    pub weight: f64,

    pub optimal_value: f64,

    pub worst_value: f64,

    /// Curve shape between the optimal and worst reference points
    pub curve: ScoringCurve,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEATHER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weatherbit.base_url", "https://api.weatherbit.io/v2.0")?
            .set_default("weatherbit.forecast_days", 7)?
            .set_default("weatherbit.current_cache_max_minutes", 10)?
            .set_default("weatherbit.cache_max_entries", 1000)?
            .set_default("evaluation.temperature.weight", 2.0)?
            .set_default("evaluation.temperature.optimal_value", 20.0)?
            .set_default("evaluation.temperature.worst_value", 0.0)?
            .set_default("evaluation.temperature.curve", "optimal_peak")?
            .set_default("evaluation.pressure.weight", 2.0)?
            .set_default("evaluation.pressure.optimal_value", 1100.0)?
            .set_default("evaluation.pressure.worst_value", 900.0)?
            .set_default("evaluation.pressure.curve", "linear")?
            .set_default("evaluation.pressure_big_delta", 5.0)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHER_ prefix)
            .add_source(
                Environment::with_prefix("WEATHER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
