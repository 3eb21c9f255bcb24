use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use fetcher::{ForecastData, ForecastReport, MAX_FORECAST_DAYS};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::{ApiError, AppState, ErrorResponse};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// City name, e.g. "Boston" or "Paris,FR"
    pub city: Option<String>,
    /// Number of days to summarize, 1-5 (defaults to 5)
    pub days: Option<String>,
}

/// Parse the requested day count, an empty value means the full horizon
pub fn parse_days(days: Option<&str>) -> Result<usize, fetcher::Error> {
    match days.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(MAX_FORECAST_DAYS),
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            fetcher::Error::Validation(format!("Invalid number of days: '{}'", raw))
        }),
    }
}

#[utoipa::path(
    get,
    path = "/api/forecast",
    params(ForecastQuery),
    responses(
        (status = OK, description = "Per-day forecast summaries", body = ForecastReport),
        (status = BAD_REQUEST, description = "Missing city or invalid day count", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Forecast provider not configured or unavailable", body = ErrorResponse)
    ))]
pub async fn forecast(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ForecastReport>, ApiError> {
    let Query(query) = query?;
    let days = parse_days(query.days.as_deref()).map_err(ApiError::user_facing)?;
    let report = state
        .forecasts
        .daily_forecast(query.city.as_deref().unwrap_or_default(), days)
        .await
        .map_err(ApiError::user_facing)?;

    Ok(Json(report))
}
