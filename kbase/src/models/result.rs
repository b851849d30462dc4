//! Search hit model

use serde::{Deserialize, Serialize};

/// A ranked search hit, derived per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Semantic identifier of the matching document
    pub id: String,

    /// Title-cased display name
    pub name: String,

    /// Description truncated for listing
    pub summary: String,

    /// Document type
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Type, declared tags and lowercased framework/language/type
    pub tags: Vec<String>,

    /// Relevance score, higher is better
    pub score: f64,
}
