use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body of the OpenWeatherMap 5 day / 3 hour forecast endpoint,
/// limited to the fields we aggregate
#[derive(Debug, Deserialize)]
pub struct OpenWeatherForecast {
    pub list: Vec<OpenWeatherEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherEntry {
    /// "2024-05-01 12:00:00"
    pub dt_txt: String,
    pub main: OpenWeatherMain,
    /// Probability of precipitation, 0.0 - 1.0
    #[serde(default)]
    pub pop: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherMain {
    pub temp: f64,
}

/// A single 3 hour forecast slot
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: String,
    pub temp_f: f64,
    pub pop: Option<f64>,
}

impl ForecastEntry {
    /// Calendar date of the slot: everything before the time portion
    pub fn date(&self) -> &str {
        self.timestamp
            .split([' ', 'T'])
            .next()
            .unwrap_or_default()
    }
}

impl From<OpenWeatherEntry> for ForecastEntry {
    fn from(value: OpenWeatherEntry) -> Self {
        ForecastEntry {
            timestamp: value.dt_txt,
            temp_f: value.main.temp,
            pop: value.pop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastSummary {
    /// YYYY-MM-DD
    pub date: String,
    /// Mean temperature in °F, one decimal place
    #[schema(example = "72.0")]
    pub avg_temp: String,
    /// Mean precipitation probability as a whole percentage
    pub pop: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastReport {
    pub city: String,
    pub days: Vec<DailyForecastSummary>,
}
