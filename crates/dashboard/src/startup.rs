use crate::{
    forecast, forecast_fragment_handler, forecast_page_handler, normals, normals_fragment_handler,
    normals_page_handler, routes,
};
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use fetcher::{
    ForecastData, ForecastService, HttpFetcher, NormalsData, NormalsService, ProviderArgs,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub forecasts: Arc<dyn ForecastData>,
    pub normals: Arc<dyn NormalsData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(routes::api::forecast::forecast, routes::api::normals::normals),
    components(schemas(
        fetcher::ForecastReport,
        fetcher::DailyForecastSummary,
        fetcher::NormalsReport,
        fetcher::DailyNormal,
        fetcher::NormalsSummary,
        routes::api::ErrorResponse,
    )),
    tags(
        (name = "wxdash api", description = "daily forecast summaries and 1991-2020 NOAA climate normals")
    )
)]
struct ApiDoc;

pub fn build_app_state(
    remote_url: String,
    providers: &ProviderArgs,
) -> Result<AppState, anyhow::Error> {
    let fetcher = Arc::new(HttpFetcher::new(&providers.user_agent())?);
    let forecast_config = providers.forecast_config();
    if forecast_config.api_key.is_none() {
        warn!("no OpenWeather api key configured, forecast requests will fail");
    }

    Ok(AppState {
        remote_url,
        forecasts: Arc::new(ForecastService::new(fetcher.clone(), forecast_config)),
        normals: Arc::new(NormalsService::new(fetcher, providers.normals_config())),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(forecast_page_handler))
        .route("/normals", get(normals_page_handler))
        // HTMX fragment routes
        .route("/fragments/forecast", get(forecast_fragment_handler))
        .route("/fragments/normals", get(normals_fragment_handler))
        // API routes
        .route("/api/forecast", get(forecast))
        .route("/api/normals", get(normals))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
