use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use jobscout_core::models::SearchRequest;
use jobscout_core::site::JobSite;
use jobscout_core::traits::JobSource;

use crate::dto::{HealthResponse, SearchRequestDto, SearchResponse, SitesResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router<J: JobSource + 'static>(state: Arc<AppState<J>>) -> Router {
    Router::new()
        .route("/v1/search", post(search))
        .route("/v1/sites", get(sites))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/v1/search",
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Aggregated search results", body = SearchResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
    ),
    tag = "search"
)]
pub async fn search<J: JobSource + 'static>(
    State(state): State<Arc<AppState<J>>>,
    axum::Json(body): axum::Json<SearchRequestDto>,
) -> Result<impl IntoResponse, ApiError> {
    // Unknown site identifiers are dropped, not fatal; an empty
    // remainder is rejected by request validation downstream.
    let mut sites = Vec::new();
    for name in &body.sites {
        match name.parse::<JobSite>() {
            Ok(site) => sites.push(site),
            Err(_) => tracing::warn!(site = %name, "Skipping unknown site"),
        }
    }

    let request = SearchRequest {
        sites,
        search_term: body.search_term,
        location: body.location,
        results_wanted: body.results_wanted,
    };

    let result = state.aggregator.aggregate(&request).await?;
    Ok(axum::Json(SearchResponse::from(result)))
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/sites",
    responses((status = 200, description = "Supported job boards", body = SitesResponse)),
    tag = "search"
)]
pub async fn sites() -> impl IntoResponse {
    axum::Json(SitesResponse {
        sites: JobSite::ALL.iter().map(|s| s.to_string()).collect(),
    })
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service health", body = HealthResponse)),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy".to_string(),
        sources: JobSite::ALL.len(),
    })
}
