//! Data Transfer Objects for the Kbase API

use kbase::models::{KnowledgeDocument, SearchResult};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use utoipa::ToSchema;

/// Search request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"query": "nodejs postgresql", "limit": 10}))]
pub struct SearchRequest {
    /// Comma and/or whitespace separated search terms; empty lists everything
    #[serde(default)]
    pub query: String,

    /// Maximum number of results. Missing, non-positive or over 20 means 10
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Single ranked search hit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    /// Semantic identifier, `{type}/{name}`
    #[schema(example = "recipe/laravel-jetstream")]
    pub id: String,

    /// Display name
    #[schema(example = "Laravel Jetstream")]
    pub name: String,

    /// Truncated description
    pub summary: String,

    /// Document type
    #[serde(rename = "type")]
    #[schema(example = "recipe")]
    pub doc_type: String,

    /// Type, declared tags, framework and language
    pub tags: Vec<String>,

    /// Relevance score, higher is better
    pub score: f64,
}

impl From<SearchResult> for SearchResultDto {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            summary: result.summary,
            doc_type: result.doc_type,
            tags: result.tags,
            score: result.score,
        }
    }
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,

    /// Hits ordered by descending score
    pub results: Vec<SearchResultDto>,

    /// Number of hits returned
    pub count: usize,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        let results: Vec<SearchResultDto> = results.into_iter().map(Into::into).collect();
        Self {
            query,
            count: results.len(),
            results,
        }
    }
}

/// Full knowledge document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeDto {
    /// Semantic identifier, `{type}/{name}`
    #[schema(example = "service/nodejs")]
    pub id: String,

    /// Kebab-case name taken from the file name
    #[schema(example = "nodejs")]
    pub name: String,

    /// Document type
    #[serde(rename = "type")]
    #[schema(example = "service")]
    pub doc_type: String,

    /// Document content exactly as stored, key order included
    #[schema(value_type = Object)]
    pub content: Box<RawValue>,
}

impl TryFrom<&KnowledgeDocument> for KnowledgeDto {
    type Error = serde_json::Error;

    fn try_from(document: &KnowledgeDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: document.id.clone(),
            name: document.name.clone(),
            doc_type: document.doc_type.clone(),
            content: document.raw_content()?,
        })
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,

    /// Number of indexed documents
    pub documents: usize,
}
