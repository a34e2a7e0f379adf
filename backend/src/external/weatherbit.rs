//! Weatherbit API client
//!
//! Talks to the Weatherbit current-weather and daily-forecast endpoints and
//! decodes their payloads into internal entities. Failure outcomes are plain
//! values so the lookup cache can record them alongside successes.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::WeatherbitConfig;
use crate::models::{CurrentWeatherEntity, ForecastSample};

const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Body marker Weatherbit sends with a 400 for an unknown city
const NO_LOCATION_MARKER: &str = "No Location Found";

/// Failure outcomes of a provider call
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("city {0} not found")]
    CityNotFound(String),

    #[error("weatherbit request failed: {0}")]
    Upstream(String),
}

/// Outcome of a provider call, paired with the rate-limit reset time so
/// successes and failures cache for the same window
#[derive(Debug, Clone)]
pub struct FetchOutcome<T> {
    pub result: Result<T, ProviderError>,
    pub rate_limit_reset: Option<DateTime<Utc>>,
}

impl<T> FetchOutcome<T> {
    fn transport(message: String) -> Self {
        Self {
            result: Err(ProviderError::Upstream(message)),
            rate_limit_reset: None,
        }
    }
}

/// Weatherbit API client
#[derive(Clone)]
pub struct WeatherbitClient {
    client: Client,
    base_url: String,
    api_key: String,
    forecast_days: u32,
}

impl WeatherbitClient {
    /// Create a new WeatherbitClient
    pub fn new(config: &WeatherbitConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            forecast_days: config.forecast_days,
        }
    }

    /// Fetch the current observation for a city.
    ///
    /// Weatherbit reports an unknown city as a 400 whose body carries
    /// "No Location Found"; that outcome becomes `ProviderError::CityNotFound`.
    pub async fn current_by_city(&self, city: &str) -> FetchOutcome<CurrentWeatherEntity> {
        let url = format!("{}/current", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("city", city)]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return FetchOutcome::transport(format!("current weather request failed: {e}"))
            }
        };
        let rate_limit_reset = rate_limit_reset(&response);

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let result = if status == StatusCode::BAD_REQUEST && body.contains(NO_LOCATION_MARKER) {
                Err(ProviderError::CityNotFound(city.to_string()))
            } else {
                Err(ProviderError::Upstream(format!(
                    "current weather returned {status}: {body}"
                )))
            };
            return FetchOutcome {
                result,
                rate_limit_reset,
            };
        }

        let group: CurrentObsGroup = match response.json().await {
            Ok(group) => group,
            Err(e) => {
                return FetchOutcome {
                    result: Err(ProviderError::Upstream(format!(
                        "failed to decode current weather response: {e}"
                    ))),
                    rate_limit_reset,
                }
            }
        };

        FetchOutcome {
            result: decode_current(group),
            rate_limit_reset,
        }
    }

    /// Fetch the daily forecast window for a city.
    ///
    /// On the forecast endpoint an unknown city comes back as an empty 204.
    pub async fn forecast_by_city(&self, city: &str) -> FetchOutcome<Vec<ForecastSample>> {
        let url = format!("{}/forecast/daily", self.base_url);
        let days = self.forecast_days.to_string();
        let request = self.client.get(&url).query(&[
            ("key", self.api_key.as_str()),
            ("city", city),
            ("days", days.as_str()),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::transport(format!("forecast request failed: {e}")),
        };
        let rate_limit_reset = rate_limit_reset(&response);

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return FetchOutcome {
                result: Err(ProviderError::CityNotFound(city.to_string())),
                rate_limit_reset,
            };
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return FetchOutcome {
                result: Err(ProviderError::Upstream(format!(
                    "forecast returned {status}: {body}"
                ))),
                rate_limit_reset,
            };
        }

        let forecast: ForecastDay = match response.json().await {
            Ok(forecast) => forecast,
            Err(e) => {
                return FetchOutcome {
                    result: Err(ProviderError::Upstream(format!(
                        "failed to decode forecast response: {e}"
                    ))),
                    rate_limit_reset,
                }
            }
        };

        FetchOutcome {
            result: decode_forecast(forecast),
            rate_limit_reset,
        }
    }
}

/// Weatherbit current-weather payload
#[derive(Debug, Deserialize)]
struct CurrentObsGroup {
    data: Option<Vec<CurrentObs>>,
}

#[derive(Debug, Deserialize)]
struct CurrentObs {
    temp: Option<f64>,
    rh: Option<i32>,
    wind_spd: Option<f64>,
    weather: Option<CurrentObsWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentObsWeather {
    description: Option<String>,
}

/// Weatherbit daily-forecast payload
#[derive(Debug, Deserialize)]
struct ForecastDay {
    data: Option<Vec<ForecastDayEntry>>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayEntry {
    datetime: Option<String>,
    temp: Option<f64>,
    pres: Option<f64>,
    wind_spd: Option<f64>,
}

fn decode_current(group: CurrentObsGroup) -> Result<CurrentWeatherEntity, ProviderError> {
    let Some(data) = group.data else {
        return Err(ProviderError::Upstream(
            "current weather response carried no data".to_string(),
        ));
    };
    // The current endpoint reports exactly one observation per city
    let mut data = data.into_iter();
    let observation = match (data.next(), data.next()) {
        (Some(observation), None) => observation,
        (None, _) => {
            return Err(ProviderError::Upstream(
                "current weather response carried empty data".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(ProviderError::Upstream(
                "current weather response carried more than one observation".to_string(),
            ))
        }
    };

    Ok(CurrentWeatherEntity {
        description: observation.weather.and_then(|w| w.description),
        temperature: observation.temp,
        wind_speed: observation.wind_spd,
        humidity: observation.rh,
    })
}

fn decode_forecast(forecast: ForecastDay) -> Result<Vec<ForecastSample>, ProviderError> {
    let Some(data) = forecast.data else {
        return Err(ProviderError::Upstream(
            "forecast response carried no data".to_string(),
        ));
    };

    data.into_iter()
        .map(|entry| {
            let date = match entry.datetime {
                Some(datetime) => NaiveDate::parse_from_str(&datetime, "%Y-%m-%d")
                    .map_err(|e| {
                        ProviderError::Upstream(format!("bad forecast date {datetime:?}: {e}"))
                    })?,
                None => Utc::now().date_naive(),
            };
            Ok(ForecastSample {
                date,
                temperature: entry.temp,
                pressure: entry.pres,
                wind_speed: entry.wind_spd,
            })
        })
        .collect()
}

fn rate_limit_reset(response: &Response) -> Option<DateTime<Utc>> {
    response
        .headers()
        .get(RATE_LIMIT_RESET_HEADER)?
        .to_str()
        .ok()?
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}
