//! Business logic services

pub mod weather;

pub use weather::{WeatherProvider, WeatherService, WeatherbitRepository};
