//! Lookup by semantic identifier

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{api::dto::KnowledgeDto, error::ServerResult, state::AppState};

/// Get a knowledge document by its semantic identifier
#[utoipa::path(
    get,
    path = "/api/v1/knowledge/{id}",
    tag = "knowledge",
    params(
        ("id" = String, Path, description = "Semantic identifier, e.g. recipe/laravel-jetstream")
    ),
    responses(
        (status = 200, description = "Knowledge document found", body = KnowledgeDto),
        (status = 404, description = "No document with this identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_knowledge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<KnowledgeDto>> {
    let document = state.knowledge.get(&id)?;
    Ok(Json(KnowledgeDto::try_from(document)?))
}
