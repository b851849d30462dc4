//! Keyword search endpoint

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;

use crate::{
    api::dto::{SearchRequest, SearchResponse},
    error::ServerResult,
    state::AppState,
};

/// Search knowledge documents
#[utoipa::path(
    post,
    path = "/api/v1/search",
    tag = "knowledge",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Ranked search results", body = SearchResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 405, description = "Method not allowed"),
        (status = 413, description = "Request body too large", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_knowledge(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ServerResult<Json<SearchResponse>> {
    let Json(request) = payload?;

    let results = state.knowledge.search(&request.query, request.limit);
    debug!("Search {:?} returned {} results", request.query, results.len());

    Ok(Json(SearchResponse::new(request.query, results)))
}
