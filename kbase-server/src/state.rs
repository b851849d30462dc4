//! Application state management

use kbase::core::KnowledgeBase;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Built once before the listener starts and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Indexed knowledge documents
    pub knowledge: KnowledgeBase,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(knowledge: KnowledgeBase, config: ServerConfig) -> Self {
        Self { knowledge, config }
    }
}
