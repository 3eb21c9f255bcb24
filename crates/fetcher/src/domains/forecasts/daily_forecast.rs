use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::{
    summarize_by_day, validate_city, validate_days, Error, ForecastEntry, ForecastReport,
    HttpFetcher, OpenWeatherForecast,
};

pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub base_url: String,
    /// OpenWeatherMap credential, `None` leaves the forecast pipeline unconfigured
    pub api_key: Option<String>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FORECAST_URL.to_string(),
            api_key: None,
        }
    }
}

#[async_trait]
pub trait ForecastData: Send + Sync {
    /// Per-day summaries for the next `days` calendar dates reported for `city`
    async fn daily_forecast(&self, city: &str, days: usize) -> Result<ForecastReport, Error>;
}

pub struct ForecastService {
    fetcher: Arc<HttpFetcher>,
    config: ForecastConfig,
}

impl ForecastService {
    pub fn new(fetcher: Arc<HttpFetcher>, config: ForecastConfig) -> Self {
        ForecastService { fetcher, config }
    }

    fn api_key(&self) -> Result<&str, Error> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration(
                    "OpenWeatherMap API key is not configured. Set WXDASH_OPENWEATHER_API_KEY."
                        .to_owned(),
                )
            })
    }

    /// Fetch the raw 3 hour forecast slots for a city, in provider order
    pub async fn fetch_entries(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Vec<ForecastEntry>, Error> {
        let body = self
            .fetcher
            .fetch_text(
                &self.config.base_url,
                &[("q", city), ("units", "imperial"), ("appid", api_key)],
                &format!("forecast for {}", city),
            )
            .await?;

        let forecast: OpenWeatherForecast = serde_json::from_str(&body)?;
        debug!("forecast slots for {}: {}", city, forecast.list.len());

        Ok(forecast.list.into_iter().map(ForecastEntry::from).collect())
    }
}

#[async_trait]
impl ForecastData for ForecastService {
    async fn daily_forecast(&self, city: &str, days: usize) -> Result<ForecastReport, Error> {
        let api_key = self.api_key()?;
        let city = validate_city(city)?;
        let days = validate_days(days)?;

        let entries = self.fetch_entries(city, api_key).await?;
        let summaries = summarize_by_day(&entries, days);
        info!(
            "summarized {} forecast slots into {} days for {}",
            entries.len(),
            summaries.len(),
            city
        );

        Ok(ForecastReport {
            city: city.to_owned(),
            days: summaries,
        })
    }
}
