//! API implementation for the Kbase HTTP server

use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;

use crate::state::AppState;

pub mod dto;
#[cfg(test)]
mod dto_tests;
pub mod knowledge;
pub mod landing;
pub mod search;

use dto::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        landing::index,
        health_check,
        search::search_knowledge,
        knowledge::get_knowledge,
    ),
    components(
        schemas(
            dto::SearchRequest,
            dto::SearchResultDto,
            dto::SearchResponse,
            dto::KnowledgeDto,
            dto::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "knowledge", description = "Search and lookup of knowledge documents"),
        (name = "health", description = "Service health"),
        (name = "meta", description = "Human-readable overview"),
    ),
    info(
        title = "Kbase Knowledge Base API",
        description = "Keyword search and semantic-identifier lookup over an in-memory knowledge base.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the main router with all API endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_request_size = state.config.max_request_size;

    let api_router = Router::new()
        .route("/search", post(search::search_knowledge))
        .route("/knowledge/{*id}", get(knowledge::get_knowledge));

    Router::new()
        .route("/", get(landing::index))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1", api_router)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_request_size))
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        documents: state.knowledge.len(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
