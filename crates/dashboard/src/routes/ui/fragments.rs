use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use fetcher::{build_normals_report, ForecastData};
use log::{error, warn};

use crate::{
    parse_days,
    templates::{error_notification, forecast_table, normals_report},
    AppState, ForecastQuery, NormalsQuery,
};

/// Handler for the forecast results fragment (GET /fragments/forecast)
pub async fn forecast_fragment_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> Html<String> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejected(rejection),
    };
    let city = query.city.as_deref().unwrap_or_default();
    let result = match parse_days(query.days.as_deref()) {
        Ok(days) => state.forecasts.daily_forecast(city, days).await,
        Err(e) => Err(e),
    };

    let markup = match result {
        Ok(report) => forecast_table(&report),
        Err(e) => {
            log_failure("forecast", &e);
            error_notification(&e.user_message())
        }
    };
    Html(markup.into_string())
}

/// Handler for the normals results fragment (GET /fragments/normals)
pub async fn normals_fragment_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NormalsQuery>, QueryRejection>,
) -> Html<String> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejected(rejection),
    };
    let result = build_normals_report(
        state.normals.as_ref(),
        query.station.as_deref().unwrap_or_default(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )
    .await;

    let markup = match result {
        Ok(report) => normals_report(&report),
        Err(e) => {
            log_failure("normals", &e);
            error_notification(&e.to_string())
        }
    };
    Html(markup.into_string())
}

fn log_failure(pipeline: &str, err: &fetcher::Error) {
    if err.is_client_error() {
        warn!("rejected {} request: {}", pipeline, err);
    } else {
        error!("error running {} pipeline: {}", pipeline, err);
    }
}

fn rejected(rejection: QueryRejection) -> Html<String> {
    warn!("rejected query string: {}", rejection.body_text());
    Html(error_notification(&rejection.body_text()).into_string())
}
