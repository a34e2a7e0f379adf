//! Route definitions for the weather evaluation API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather lookups
        .nest("/weather", weather_routes())
}

/// Weather lookup routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::current_weather))
        .route("/forecast", get(handlers::weather_forecast))
}
