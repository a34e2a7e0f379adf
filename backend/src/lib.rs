//! Weather evaluation API backend
//!
//! A REST façade over the Weatherbit provider: fetches current weather and
//! multi-day forecasts by city name, scores forecast days against configured
//! comfort optima, and classifies the resulting trends.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod cache;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use error::AppError;
use evaluation::ForecastScorer;
use services::weather::{WeatherService, WeatherbitRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService<WeatherbitRepository>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// An invalid scoring profile fails here, at startup.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let scorer = ForecastScorer::from_config(&config.evaluation)?;
        let repository = WeatherbitRepository::new(&config.weatherbit);
        let weather = WeatherService::new(
            repository,
            scorer,
            config.evaluation.pressure_big_delta,
        );

        Ok(Self {
            weather: Arc::new(weather),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Evaluation API v1.0"
}
