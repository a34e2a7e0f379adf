//! Weather lookup façade
//!
//! Combines the cached provider repository with the evaluation pipeline and
//! maps provider outcomes onto application results. Expected domain outcomes
//! (city not found, upstream failure) are values, never panics.

use std::future::Future;

use chrono::Duration;

use shared::{CurrentWeatherDto, WeatherForecastDto};

use crate::cache::{CachePolicy, QueryCache};
use crate::config::WeatherbitConfig;
use crate::error::{AppError, AppResult};
use crate::evaluation::{evaluate_forecast, ForecastScorer};
use crate::external::weatherbit::{FetchOutcome, ProviderError, WeatherbitClient};
use crate::models::{CurrentWeatherEntity, ForecastSample};

/// Fetch seam between the façade and the upstream weather provider
pub trait WeatherProvider: Send + Sync {
    fn current_by_city(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<CurrentWeatherEntity, ProviderError>> + Send;

    fn forecast_by_city(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<ForecastSample>, ProviderError>> + Send;
}

/// Weatherbit-backed provider: the HTTP client behind per-endpoint lookup
/// caches keyed by city name
pub struct WeatherbitRepository {
    client: WeatherbitClient,
    current_cache: QueryCache<Result<CurrentWeatherEntity, ProviderError>>,
    forecast_cache: QueryCache<Result<Vec<ForecastSample>, ProviderError>>,
}

impl WeatherbitRepository {
    pub fn new(config: &WeatherbitConfig) -> Self {
        Self {
            client: WeatherbitClient::new(config),
            current_cache: QueryCache::new(
                "current",
                CachePolicy {
                    max_lifetime: Some(Duration::minutes(
                        i64::from(config.current_cache_max_minutes),
                    )),
                },
                config.cache_max_entries,
            ),
            // Forecast entries live until the provider's rate-limit reset
            forecast_cache: QueryCache::new(
                "forecast",
                CachePolicy { max_lifetime: None },
                config.cache_max_entries,
            ),
        }
    }
}

impl WeatherProvider for WeatherbitRepository {
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeatherEntity, ProviderError> {
        let client = self.client.clone();
        let lookup = city.to_string();
        self.current_cache
            .get_or_fetch(city, || async move {
                let FetchOutcome {
                    result,
                    rate_limit_reset,
                } = client.current_by_city(&lookup).await;
                (result, rate_limit_reset)
            })
            .await
    }

    async fn forecast_by_city(&self, city: &str) -> Result<Vec<ForecastSample>, ProviderError> {
        let client = self.client.clone();
        let lookup = city.to_string();
        self.forecast_cache
            .get_or_fetch(city, || async move {
                let FetchOutcome {
                    result,
                    rate_limit_reset,
                } = client.forecast_by_city(&lookup).await;
                (result, rate_limit_reset)
            })
            .await
    }
}

/// Request façade for the weather endpoints
pub struct WeatherService<P> {
    provider: P,
    scorer: ForecastScorer,
    pressure_big_delta: f64,
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn new(provider: P, scorer: ForecastScorer, pressure_big_delta: f64) -> Self {
        Self {
            provider,
            scorer,
            pressure_big_delta,
        }
    }

    /// Current weather for a city, projected directly from the observation.
    ///
    /// Wind speed stays in m/s, the internal canonical unit.
    pub async fn current_weather(&self, city: &str) -> AppResult<CurrentWeatherDto> {
        let observation = self
            .provider
            .current_by_city(city)
            .await
            .map_err(provider_error)?;
        Ok(project_current(observation))
    }

    /// Forecast summary for a city: the earliest day against the rest of the
    /// window.
    pub async fn weather_forecast(&self, city: &str) -> AppResult<WeatherForecastDto> {
        let window = self
            .provider
            .forecast_by_city(city)
            .await
            .map_err(provider_error)?;
        let summary = evaluate_forecast(&window, &self.scorer, self.pressure_big_delta)?;
        Ok(summary)
    }
}

fn provider_error(error: ProviderError) -> AppError {
    match error {
        ProviderError::CityNotFound(city) => AppError::CityNotFound(city),
        ProviderError::Upstream(message) => AppError::Upstream(message),
    }
}

/// Map an observation onto the response shape (direct field copy)
fn project_current(observation: CurrentWeatherEntity) -> CurrentWeatherDto {
    CurrentWeatherDto {
        description: observation.description,
        temperature: observation.temperature,
        wind_speed: observation.wind_speed,
        humidity: observation.humidity,
    }
}
