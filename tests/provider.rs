//! Weather client tests against a mock OpenWeatherMap server

use askweather::config::AskWeatherConfig;
use askweather::weather::WeatherClient;
use askweather::{AskWeatherError, Metric};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> AskWeatherConfig {
    let mut config = AskWeatherConfig::default();
    config.weather.api_key = Some("test_api_key_123".to_string());
    config.weather.base_url = base_url.to_string();
    config.weather.max_retries = 0;
    config.weather.timeout_seconds = 5;
    config
}

fn chennai_conditions() -> serde_json::Value {
    json!({
        "name": "Chennai",
        "main": { "temp": 31.5, "humidity": 74, "pressure": 1008 },
        "wind": { "speed": 4.2 }
    })
}

#[tokio::test]
async fn current_conditions_are_fetched_and_projected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "chennai"))
        .and(query_param("appid", "test_api_key_123"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chennai_conditions()))
        .mount(&server)
        .await;

    let client = WeatherClient::new(&test_config(&server.uri())).unwrap();
    let conditions = client.current("chennai").await.unwrap();

    assert_eq!(conditions.metric_value(Metric::Temperature), Some(31.5));
    assert_eq!(conditions.metric_value(Metric::Humidity), Some(74.0));
    assert_eq!(conditions.metric_value(Metric::WindSpeed), Some(4.2));
    assert_eq!(conditions.metric_value(Metric::Rainfall), Some(0.0));
}

#[tokio::test]
async fn unknown_location_maps_to_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "cod": "404", "message": "city not found"
        })))
        .mount(&server)
        .await;

    let client = WeatherClient::new(&test_config(&server.uri())).unwrap();
    let result = client.current("atlantis").await;

    match result {
        Err(AskWeatherError::Provider { message }) => {
            assert!(message.contains("atlantis"), "got: {message}");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_credentials_map_to_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = WeatherClient::new(&test_config(&server.uri())).unwrap();
    let result = client.current("chennai").await;

    match result {
        Err(AskWeatherError::Provider { message }) => {
            assert!(message.contains("API key"), "got: {message}");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chennai_conditions()))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.weather.max_retries = 2;
    let client = WeatherClient::new(&config).unwrap();

    let conditions = client.current("chennai").await.unwrap();
    assert_eq!(conditions.metric_value(Metric::Temperature), Some(31.5));
}

#[tokio::test]
async fn one_failing_location_does_not_abort_siblings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "chennai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chennai_conditions()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = WeatherClient::new(&test_config(&server.uri())).unwrap();
    let locations = vec!["chennai".to_string(), "atlantis".to_string()];
    let (readings, failures) = client.lookup_all(Metric::Temperature, &locations).await;

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].location, "chennai");
    assert_eq!(readings[0].value, Some(31.5));
    assert_eq!(readings[0].units, "°C");

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].location, "atlantis");
}
