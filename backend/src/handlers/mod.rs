//! HTTP handlers for the weather evaluation API

pub mod health;
pub mod weather;

pub use health::health_check;
pub use weather::{current_weather, weather_forecast};
