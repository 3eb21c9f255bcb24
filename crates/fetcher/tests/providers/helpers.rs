use fetcher::{
    ForecastConfig, ForecastService, HttpFetcher, NormalsConfig, NormalsService,
};
use std::sync::Arc;
use wiremock::MockServer;

pub const FORECAST_PATH: &str = "/data/2.5/forecast";
pub const NORMALS_PATH: &str = "/normals-daily/access";

fn fetcher() -> Arc<HttpFetcher> {
    Arc::new(HttpFetcher::new("wxdash-tests").expect("http client"))
}

pub fn forecast_service(server: &MockServer, api_key: Option<&str>) -> ForecastService {
    ForecastService::new(
        fetcher(),
        ForecastConfig {
            base_url: format!("{}{}", server.uri(), FORECAST_PATH),
            api_key: api_key.map(str::to_owned),
        },
    )
}

pub fn normals_service(server: &MockServer) -> NormalsService {
    NormalsService::new(
        fetcher(),
        NormalsConfig {
            base_url: format!("{}{}/", server.uri(), NORMALS_PATH),
        },
    )
}

/// OpenWeatherMap payload spanning three calendar dates
pub fn three_day_forecast() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 6,
        "list": [
            {"dt": 1, "main": {"temp": 70.0}, "pop": 0.1, "dt_txt": "2024-05-01 12:00:00"},
            {"dt": 2, "main": {"temp": 72.0}, "pop": 0.3, "dt_txt": "2024-05-01 15:00:00"},
            {"dt": 3, "main": {"temp": 74.0}, "dt_txt": "2024-05-01 18:00:00"},
            {"dt": 4, "main": {"temp": 60.0}, "pop": 0.0, "dt_txt": "2024-05-02 00:00:00"},
            {"dt": 5, "main": {"temp": 61.0}, "pop": 0.5, "dt_txt": "2024-05-02 03:00:00"},
            {"dt": 6, "main": {"temp": 55.5}, "pop": 1.0, "dt_txt": "2024-05-03 00:00:00"}
        ],
        "city": {"name": "Boston", "country": "US"}
    })
}
