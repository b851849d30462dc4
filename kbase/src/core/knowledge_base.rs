//! Search coordinator and lookup over an immutable document store.

use std::sync::Arc;

use tracing::debug;

use crate::config::{KbConfig, SearchConfig};
use crate::models::{KnowledgeDocument, SearchResult, extract_tags, summarize};
use crate::search::{ScoreCalculator, parse_query, resolve_limit};
use crate::storage::{DirectorySource, DocumentSource, DocumentStore, build_store};
use crate::{KbError, Result};

/// Read-only knowledge base.
///
/// Cloning is cheap; clones share the same store.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    store: Arc<DocumentStore>,
    calculator: ScoreCalculator,
    config: SearchConfig,
}

impl KnowledgeBase {
    /// Wrap an already built store
    pub fn new(store: DocumentStore, config: SearchConfig) -> Result<Self> {
        let calculator = ScoreCalculator::try_new(config.scoring.clone())?;
        Ok(Self {
            store: Arc::new(store),
            calculator,
            config,
        })
    }

    /// Index every document of `source`
    pub fn from_source(source: &dyn DocumentSource, config: &KbConfig) -> Result<Self> {
        let (store, _report) = build_store(source, &config.data.extension)?;
        Self::new(store, config.search.clone())
    }

    /// Index the directory named by `config.data`
    pub fn from_config(config: &KbConfig) -> Result<Self> {
        let source = DirectorySource::new(&config.data.dir, &config.data.extension);
        Self::from_source(&source, config)
    }

    /// Rank documents against `raw_query`.
    ///
    /// The query is split on commas and whitespace. Documents scoring zero are
    /// dropped; the rest are ordered by descending score, equal scores keeping
    /// ascending identifier order. `limit` outside `1..=max_limit` falls back
    /// to the default limit.
    pub fn search(&self, raw_query: &str, limit: Option<i64>) -> Vec<SearchResult> {
        let terms = parse_query(raw_query);
        let limit = resolve_limit(limit, self.config.default_limit, self.config.max_limit);

        let mut scored: Vec<(f64, &KnowledgeDocument)> = self
            .store
            .all()
            .filter_map(|document| {
                let score = self.calculator.score(document, &terms);
                (score > 0.0).then_some((score, document))
            })
            .collect();

        let matched = scored.len();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(limit);

        debug!(
            "Search {:?}: {} terms, {} matches, returning {}",
            raw_query,
            terms.len(),
            matched,
            scored.len()
        );

        scored
            .into_iter()
            .map(|(score, document)| self.to_result(document, score))
            .collect()
    }

    fn to_result(&self, document: &KnowledgeDocument, score: f64) -> SearchResult {
        let view = document.view();
        SearchResult {
            id: document.id.clone(),
            name: document.display_name(),
            summary: summarize(
                view.description.as_deref().unwrap_or_default(),
                self.config.summary_max_chars,
            ),
            doc_type: document.doc_type.clone(),
            tags: extract_tags(&document.doc_type, view),
            score,
        }
    }

    /// Look up a document by its semantic identifier
    pub fn get(&self, id: &str) -> Result<&KnowledgeDocument> {
        self.store
            .get(id)
            .ok_or_else(|| KbError::NotFound(id.to_string()))
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The underlying store
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Search settings in effect
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
