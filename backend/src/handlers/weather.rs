//! HTTP handlers for the weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use shared::{CurrentWeatherDto, WeatherForecastDto};

use crate::error::AppResult;
use crate::AppState;

/// Query parameters shared by both weather endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct CityQuery {
    /// City name, e.g. "Tokyo"
    #[validate(custom = "not_blank")]
    pub city: String,
}

fn not_blank(city: &str) -> Result<(), ValidationError> {
    if city.trim().is_empty() {
        return Err(ValidationError::new("city must not be blank"));
    }
    Ok(())
}

/// Get current weather for a city
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<CurrentWeatherDto>> {
    query.validate()?;
    let current = state.weather.current_weather(&query.city).await?;
    Ok(Json(current))
}

/// Get the weather forecast summary for a city
pub async fn weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<WeatherForecastDto>> {
    query.validate()?;
    let forecast = state.weather.weather_forecast(&query.city).await?;
    Ok(Json(forecast))
}
