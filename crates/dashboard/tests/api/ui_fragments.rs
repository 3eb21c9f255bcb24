use crate::helpers::{
    forecast_report, spawn_app, station_normals, unused_forecasts, unused_normals, MockForecasts,
    MockNormals,
};
use axum::http::StatusCode;

#[tokio::test]
async fn pages_render_search_forms() {
    let test_app = spawn_app(unused_forecasts(), unused_normals());

    let (status, html) = test_app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("hx-get=\"/fragments/forecast\""));
    assert!(html.contains("name=\"city\""));
    assert!(html.contains("http://127.0.0.1:9810/docs"));

    let (status, html) = test_app.get("/normals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("hx-get=\"/fragments/normals\""));
    assert!(html.contains("name=\"startDate\""));
    assert!(html.contains("name=\"endDate\""));
}

#[tokio::test]
async fn forecast_fragment_renders_table() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|city, days| Ok(forecast_report(city, days)));

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, html) = test_app.get("/fragments/forecast?city=Boston&days=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Forecast for Boston"));
    assert!(html.contains("<table"));
    assert!(html.contains("72.0°F"));
    assert!(html.contains("25%"));
    assert!(html.contains("has-text-weight-semibold"));
}

#[tokio::test]
async fn forecast_fragment_shows_user_message_on_failure() {
    let mut forecasts = MockForecasts::new();
    forecasts
        .expect_daily_forecast()
        .times(1)
        .returning(|_, _| {
            Err(fetcher::Error::Upstream {
                resource: "forecast for Atlantis".into(),
                status: 404,
            })
        });

    let test_app = spawn_app(forecasts, unused_normals());
    let (status, html) = test_app.get("/fragments/forecast?city=Atlantis").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("notification is-danger"));
    assert!(html.contains("Failed to fetch weather data."));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn normals_fragment_renders_summary_and_records() {
    let mut normals = MockNormals::new();
    normals
        .expect_station_normals()
        .times(1)
        .returning(|station| Ok(station_normals(station)));

    let test_app = spawn_app(unused_forecasts(), normals);
    let (status, html) = test_app
        .get("/fragments/normals?station=USW00014739&startDate=20200101&endDate=20200101")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Normals for USW00014739"));
    assert!(html.contains("<table"));
    assert!(html.contains("20200101"));
    assert!(!html.contains("20200103"));
    assert!(html.contains("30.0°F"));
    assert!(html.contains("class=\"box has-text-centered\""));
    assert!(html.contains("class=\"heading\""));
}

#[tokio::test]
async fn normals_fragment_shows_validation_error() {
    let test_app = spawn_app(unused_forecasts(), unused_normals());
    let (status, html) = test_app.get("/fragments/normals?station=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("notification is-danger"));
    assert!(html.contains("A station id is required."));
}

#[tokio::test]
async fn fragments_show_malformed_query_as_notification() {
    let test_app = spawn_app(unused_forecasts(), unused_normals());

    for uri in [
        "/fragments/normals?station=A&station=B",
        "/fragments/forecast?city=Boston&city=Paris",
    ] {
        let (status, html) = test_app.get(uri).await;

        assert_eq!(status, StatusCode::OK, "uri: {}", uri);
        assert!(html.contains("notification is-danger"));
        assert!(html.contains("duplicate field"));
    }
}
