//! Weatherbit client tests
//!
//! Runs the client against a mocked provider: success payloads, the two
//! city-not-found shapes (400 + "No Location Found" on /current, empty 204 on
//! /forecast/daily), key failures, and rate-limit header capture.

use chrono::{DateTime, NaiveDate};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_backend::config::WeatherbitConfig;
use weather_backend::external::weatherbit::{ProviderError, WeatherbitClient};
use weather_backend::models::CurrentWeatherEntity;

fn client_for(server: &MockServer) -> WeatherbitClient {
    WeatherbitClient::new(&WeatherbitConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        forecast_days: 5,
        current_cache_max_minutes: 10,
        cache_max_entries: 100,
    })
}

fn current_tokyo_body() -> serde_json::Value {
    json!({
        "count": 1,
        "data": [{
            "temp": 25.0,
            "rh": 88,
            "wind_spd": 7.2,
            "weather": { "description": "Clear sky" },
            "city_name": "Tokyo"
        }]
    })
}

#[tokio::test]
async fn current_weather_decodes_the_single_observation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .and(query_param("key", "test-key"))
        .and(query_param("city", "Tokyo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_tokyo_body()))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Tokyo").await;

    assert_eq!(
        outcome.result.unwrap(),
        CurrentWeatherEntity {
            description: Some("Clear sky".to_string()),
            temperature: Some(25.0),
            wind_speed: Some(7.2),
            humidity: Some(88),
        }
    );
}

#[tokio::test]
async fn current_weather_passes_missing_fields_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "data": [{}]
        })))
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Tokyo").await;

    assert_eq!(
        outcome.result.unwrap(),
        CurrentWeatherEntity {
            description: None,
            temperature: None,
            wind_speed: None,
            humidity: None,
        }
    );
}

#[tokio::test]
async fn current_weather_maps_no_location_to_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "No Location Found." })),
        )
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Nowhere").await;

    assert_eq!(
        outcome.result.unwrap_err(),
        ProviderError::CityNotFound("Nowhere".to_string())
    );
}

#[tokio::test]
async fn current_weather_key_failure_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "API key not valid" })),
        )
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Tokyo").await;

    assert!(matches!(
        outcome.result.unwrap_err(),
        ProviderError::Upstream(_)
    ));
}

#[tokio::test]
async fn current_weather_rejects_multiple_observations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "data": [{}, {}]
        })))
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Tokyo").await;

    assert!(matches!(
        outcome.result.unwrap_err(),
        ProviderError::Upstream(_)
    ));
}

#[tokio::test]
async fn rate_limit_reset_header_is_captured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/current"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_tokyo_body())
                .insert_header("X-RateLimit-Reset", "1696161600"),
        )
        .mount(&server)
        .await;

    let outcome = client_for(&server).current_by_city("Tokyo").await;

    assert_eq!(
        outcome.rate_limit_reset,
        Some(DateTime::from_timestamp(1_696_161_600, 0).unwrap())
    );
}

#[tokio::test]
async fn forecast_decodes_the_daily_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/daily"))
        .and(query_param("key", "test-key"))
        .and(query_param("city", "Tokyo"))
        .and(query_param("days", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city_name": "Tokyo",
            "data": [
                { "datetime": "2023-10-01", "temp": 20.0, "pres": 1010.0, "wind_spd": 1.38 },
                { "datetime": "2023-10-02", "temp": 22.0, "pres": 1005.0, "wind_spd": 3.3 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server).forecast_by_city("Tokyo").await;
    let samples = outcome.result.unwrap();

    assert_eq!(samples.len(), 2);
    assert_eq!(
        samples[0].date,
        NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()
    );
    assert_eq!(samples[0].temperature, Some(20.0));
    assert_eq!(samples[1].pressure, Some(1005.0));
    assert_eq!(samples[1].wind_speed, Some(3.3));
}

#[tokio::test]
async fn forecast_maps_empty_204_to_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/daily"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let outcome = client_for(&server).forecast_by_city("Nowhere").await;

    assert_eq!(
        outcome.result.unwrap_err(),
        ProviderError::CityNotFound("Nowhere".to_string())
    );
}

#[tokio::test]
async fn forecast_with_malformed_date_is_an_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "datetime": "not-a-date", "temp": 20.0 }]
        })))
        .mount(&server)
        .await;

    let outcome = client_for(&server).forecast_by_city("Tokyo").await;

    assert!(matches!(
        outcome.result.unwrap_err(),
        ProviderError::Upstream(_)
    ));
}
