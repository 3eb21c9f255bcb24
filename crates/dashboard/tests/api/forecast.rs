use crate::helpers::{forecast_report, spawn_app, unused_forecasts, unused_normals, MockForecasts};
use axum::http::StatusCode;
use fetcher::MAX_FORECAST_DAYS;
use serde_json::Value;

#[tokio::test]
async fn forecast_returns_daily_summaries() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|city, days| {
            assert_eq!(city, "Boston");
            assert_eq!(days, 2);
            Ok(forecast_report(city, days))
        });

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=Boston&days=2").await;

    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["city"], "Boston");
    let days = report["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-03-01");
    assert_eq!(days[0]["avgTemp"], "72.0");
    assert_eq!(days[0]["pop"], 20);
}

#[tokio::test]
async fn forecast_defaults_to_full_horizon() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|city, days| {
            assert_eq!(days, MAX_FORECAST_DAYS);
            Ok(forecast_report(city, days))
        });

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, _) = test_app.get("/api/forecast?city=Paris,FR").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn forecast_rejects_non_numeric_days() {
    let test_app = spawn_app(unused_forecasts(), unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=Boston&days=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("lots"));
}

#[tokio::test]
async fn forecast_validation_errors_are_bad_requests() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|_, _| Err(fetcher::Error::Validation("Please enter a city name.".into())));

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"], "Please enter a city name.");
}

#[tokio::test]
async fn forecast_missing_api_key_is_server_error() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|_, _| {
            Err(fetcher::Error::Configuration(
                "OpenWeather API key is not configured.".into(),
            ))
        });

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=Boston").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(error["error"], "OpenWeather API key is not configured.");
}

#[tokio::test]
async fn forecast_upstream_failure_uses_generic_message() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|city, _| {
            Err(fetcher::Error::Upstream {
                resource: format!("forecast for {}", city),
                status: 404,
            })
        });

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=Atlantis").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        error["error"],
        "Failed to fetch weather data. Please check your input and try again."
    );
}

#[tokio::test]
async fn forecast_malformed_query_returns_json_error() {
    let test_app = spawn_app(unused_forecasts(), unused_normals());
    let (status, body) = test_app.get("/api/forecast?city=Boston&city=Paris").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("duplicate field"));
}
