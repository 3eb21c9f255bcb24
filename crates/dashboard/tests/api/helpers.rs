use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use dashboard::{app, AppState};
use fetcher::{DailyForecastSummary, DailyNormal, ForecastData, ForecastReport, NormalsData};
use hyper::{header, Method};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Normals {}
    #[async_trait]
    impl NormalsData for Normals {
        async fn station_normals(&self, station_id: &str) -> Result<Vec<DailyNormal>, fetcher::Error>;
    }
}

mock! {
    pub Forecasts {}
    #[async_trait]
    impl ForecastData for Forecasts {
        async fn daily_forecast(&self, city: &str, days: usize) -> Result<ForecastReport, fetcher::Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_app(forecasts: MockForecasts, normals: MockNormals) -> TestApp {
    let app_state = AppState {
        remote_url: "http://127.0.0.1:9810".to_string(),
        forecasts: Arc::new(forecasts),
        normals: Arc::new(normals),
    };

    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json, text/html")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

pub fn normal(station_id: &str, date: &str, mean: Option<f64>) -> DailyNormal {
    DailyNormal {
        station_id: station_id.to_string(),
        date: date.to_string(),
        mean_temp_f: mean,
        max_temp_f: mean.map(|m| m + 10.0),
        min_temp_f: mean.map(|m| m - 10.0),
        precip_in: Some(0.12),
    }
}

/// Three January days for a station, the middle one with no temperatures
pub fn station_normals(station_id: &str) -> Vec<DailyNormal> {
    vec![
        normal(station_id, "20200101", Some(30.0)),
        normal(station_id, "20200102", None),
        normal(station_id, "20200103", Some(34.0)),
    ]
}

pub fn forecast_report(city: &str, days: usize) -> ForecastReport {
    let days = [("2024-03-01", "72.0", 20), ("2024-03-02", "60.5", 25)]
        .into_iter()
        .take(days)
        .map(|(date, avg_temp, pop)| DailyForecastSummary {
            date: date.to_string(),
            avg_temp: avg_temp.to_string(),
            pop,
        })
        .collect();

    ForecastReport {
        city: city.to_string(),
        days,
    }
}

/// Mock that fails the test if the pipeline is reached
pub fn unused_normals() -> MockNormals {
    let mut normals = MockNormals::new();
    normals.expect_station_normals().never();
    normals
}

pub fn unused_forecasts() -> MockForecasts {
    let mut forecasts = MockForecasts::new();
    forecasts.expect_daily_forecast().never();
    forecasts
}
