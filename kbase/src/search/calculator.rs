//! Relevance score calculator
//!
//! Implements the weighted term-matching score used to rank knowledge
//! documents. A score of exactly `0.0` means the document does not match.

use crate::models::KnowledgeDocument;
use crate::{KbError, Result};

use super::scoring::ScoringConfig;

/// Lowercased fields compared against query terms
struct ScoringFields {
    id: String,
    name: String,
    content: String,
    framework: String,
    language: String,
    description: String,
}

impl ScoringFields {
    fn extract(document: &KnowledgeDocument) -> Self {
        let view = document.view();
        let lower = |value: &Option<String>| value.as_deref().unwrap_or_default().to_lowercase();

        Self {
            id: document.id.to_lowercase(),
            name: document.display_name().to_lowercase(),
            content: document.raw().to_lowercase(),
            framework: lower(&view.framework),
            language: lower(&view.language),
            description: lower(&view.description),
        }
    }
}

/// Scores documents against query terms according to a [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Create a calculator, rejecting invalid weights
    pub fn try_new(config: ScoringConfig) -> Result<Self> {
        config.validate().map_err(KbError::InvalidScoring)?;
        Ok(Self { config })
    }

    /// Score `document` against lowercase `terms`.
    ///
    /// An empty term list scores every document with the configured
    /// empty-query score. Otherwise the result is `0.0` when no term matched
    /// anywhere, and positive when at least one did.
    pub fn score(&self, document: &KnowledgeDocument, terms: &[String]) -> f64 {
        if terms.is_empty() {
            return self.config.empty_query_score;
        }

        let fields = ScoringFields::extract(document);

        let mut total = 0.0;
        let mut matched = 0usize;
        for term in terms {
            if let Some(term_score) = self.term_score(&fields, term) {
                total += term_score;
                matched += 1;
            }
        }

        if matched == 0 {
            return 0.0;
        }

        let term_count = terms.len() as f64;
        let base = total / term_count;

        let mut score = if matched == terms.len() {
            base * self.config.completeness_multiplier
        } else {
            base * (matched as f64 / term_count)
        };

        if self.config.is_bonus_type(&document.doc_type) {
            score += self.exact_match_bonus(&fields, terms);
        }

        score
    }

    /// Weight earned by a single term, or `None` if it matched nowhere.
    ///
    /// Field tiers are summed; the raw-content fallback only applies when no
    /// tier matched.
    fn term_score(&self, fields: &ScoringFields, term: &str) -> Option<f64> {
        let mut score = 0.0;
        let mut hit = false;

        if fields.id.contains(term) || fields.name.contains(term) {
            score += self.config.identifier_weight;
            hit = true;
        }
        if !fields.framework.is_empty() && fields.framework.contains(term) {
            score += self.config.framework_weight;
            hit = true;
        }
        if !fields.language.is_empty() && fields.language.contains(term) {
            score += self.config.language_weight;
            hit = true;
        }
        if !fields.description.is_empty() && fields.description.contains(term) {
            score += self.config.description_weight;
            hit = true;
        }

        if !hit && fields.content.contains(term) {
            score += self.config.content_fallback_weight;
            hit = true;
        }

        hit.then_some(score)
    }

    fn exact_match_bonus(&self, fields: &ScoringFields, terms: &[String]) -> f64 {
        let mut bonus = 0.0;
        for term in terms {
            if !fields.framework.is_empty() && fields.framework == *term {
                bonus += self.config.exact_framework_bonus;
            }
            if fields.name.contains(term.as_str()) {
                bonus += self.config.name_bonus;
            }
        }
        bonus
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
