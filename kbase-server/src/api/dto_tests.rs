//! Unit tests for DTOs and OpenAPI schema generation

#[cfg(test)]
mod tests {
    use crate::api::ApiDoc;
    use crate::api::dto::*;
    use kbase::models::{KnowledgeDocument, SearchResult};
    use serde_json::json;
    use utoipa::OpenApi;

    #[test]
    fn test_search_request_defaults() {
        let request: SearchRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.query, "");
        assert_eq!(request.limit, None);

        let request: SearchRequest =
            serde_json::from_value(json!({"query": "nodejs", "limit": -5})).unwrap();
        assert_eq!(request.query, "nodejs");
        assert_eq!(request.limit, Some(-5));
    }

    #[test]
    fn test_search_request_rejects_mistyped_fields() {
        assert!(serde_json::from_value::<SearchRequest>(json!({"query": 5})).is_err());
        assert!(serde_json::from_value::<SearchRequest>(json!({"limit": "ten"})).is_err());
    }

    #[test]
    fn test_search_result_serializes_type_field() {
        let dto = SearchResultDto::from(SearchResult {
            id: "recipe/laravel-jetstream".to_string(),
            name: "Laravel Jetstream".to_string(),
            summary: "Laravel starter kit".to_string(),
            doc_type: "recipe".to_string(),
            tags: vec!["recipe".to_string(), "laravel".to_string()],
            score: 21.0,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["type"], "recipe");
        assert!(value.get("doc_type").is_none());
        assert_eq!(value["tags"], json!(["recipe", "laravel"]));
        assert_eq!(value["score"], 21.0);
    }

    #[test]
    fn test_search_response_counts_results() {
        let response = SearchResponse::new("anything".to_string(), Vec::new());
        assert_eq!(response.count, 0);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"query": "anything", "results": [], "count": 0}));
    }

    #[test]
    fn test_knowledge_dto_keeps_content() {
        let content = json!({"description": "Relational database", "ports": [5432]});
        let document =
            KnowledgeDocument::new("service/postgresql", "postgresql", "service", content.clone());

        let value = serde_json::to_value(KnowledgeDto::try_from(&document).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "service/postgresql",
                "name": "postgresql",
                "type": "service",
                "content": content
            })
        );
    }

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["info"]["title"], "Kbase Knowledge Base API");
        assert!(value["paths"].get("/api/v1/search").is_some());
        assert!(value["paths"].get("/api/v1/knowledge/{id}").is_some());
        assert!(value["paths"].get("/health").is_some());

        let schemas = &value["components"]["schemas"];
        for name in [
            "SearchRequest",
            "SearchResponse",
            "SearchResultDto",
            "KnowledgeDto",
            "HealthResponse",
            "ErrorResponse",
        ] {
            assert!(schemas.get(name).is_some(), "missing schema {name}");
        }
    }
}
