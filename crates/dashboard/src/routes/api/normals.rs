use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use fetcher::{build_normals_report, NormalsReport};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::{ApiError, AppState, ErrorResponse};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NormalsQuery {
    /// Station identifier, e.g. USW00014739
    pub station: Option<String>,
    /// Inclusive lower bound, YYYYMMDD
    pub start_date: Option<String>,
    /// Inclusive upper bound, YYYYMMDD
    pub end_date: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/normals",
    params(NormalsQuery),
    responses(
        (status = OK, description = "Filtered daily normals with summary statistics", body = NormalsReport),
        (status = BAD_REQUEST, description = "Missing or invalid station id or date bound", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to fetch or read the station's normals", body = ErrorResponse)
    ))]
pub async fn normals(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NormalsQuery>, QueryRejection>,
) -> Result<Json<NormalsReport>, ApiError> {
    let Query(query) = query?;
    let station = query
        .station
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing required query parameter: station"))?;

    let report = build_normals_report(
        state.normals.as_ref(),
        station,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )
    .await?;

    Ok(Json(report))
}
