//! External API integrations

pub mod weatherbit;

pub use weatherbit::WeatherbitClient;
