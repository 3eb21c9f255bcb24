use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{
    templates::{forecast_page, normals_page},
    AppState,
};

/// Handler for the forecast page (GET /)
pub async fn forecast_page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(forecast_page(&state.remote_url).into_string())
}

/// Handler for the climate normals page (GET /normals)
pub async fn normals_page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(normals_page(&state.remote_url).into_string())
}
