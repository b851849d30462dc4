//! Search scoring configuration

use serde::{Deserialize, Serialize};

/// Weights and bonuses used by [`super::ScoreCalculator`].
///
/// The defaults reproduce the standard ranking. Weights can be overridden
/// under `search.scoring` in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Term found in the identifier or display name. Default: 3.0
    pub identifier_weight: f64,

    /// Term found in the `framework` field. Default: 2.5
    pub framework_weight: f64,

    /// Term found in the `language` field. Default: 2.0
    pub language_weight: f64,

    /// Term found in the `description` field. Default: 1.5
    pub description_weight: f64,

    /// Term found only somewhere else in the raw content. Default: 0.5
    pub content_fallback_weight: f64,

    /// Multiplier applied when every term matched. Default: 2.0
    ///
    /// Partial matches are multiplied by the matched fraction instead.
    pub completeness_multiplier: f64,

    /// Flat bonus per term equal to the framework. Default: 5.0
    pub exact_framework_bonus: f64,

    /// Flat bonus per term contained in the display name. Default: 2.0
    pub name_bonus: f64,

    /// Score given to every document for an empty query. Default: 0.1
    pub empty_query_score: f64,

    /// Document types eligible for the flat bonuses
    pub bonus_types: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            identifier_weight: 3.0,
            framework_weight: 2.5,
            language_weight: 2.0,
            description_weight: 1.5,
            content_fallback_weight: 0.5,
            completeness_multiplier: 2.0,
            exact_framework_bonus: 5.0,
            name_bonus: 2.0,
            empty_query_score: 0.1,
            bonus_types: vec!["recipe".to_string(), "patterns".to_string()],
        }
    }
}

impl ScoringConfig {
    /// Create a new scoring configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    ///
    /// All weights must be finite and non-negative, and the empty-query score
    /// must be positive so that browsing still returns documents.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("identifier_weight", self.identifier_weight),
            ("framework_weight", self.framework_weight),
            ("language_weight", self.language_weight),
            ("description_weight", self.description_weight),
            ("content_fallback_weight", self.content_fallback_weight),
            ("completeness_multiplier", self.completeness_multiplier),
            ("exact_framework_bonus", self.exact_framework_bonus),
            ("name_bonus", self.name_bonus),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite value >= 0.0"));
            }
        }

        if !self.empty_query_score.is_finite() || self.empty_query_score <= 0.0 {
            return Err("empty_query_score must be > 0.0".to_string());
        }

        Ok(())
    }

    /// Whether documents of `doc_type` receive the flat bonuses
    pub fn is_bonus_type(&self, doc_type: &str) -> bool {
        self.bonus_types.iter().any(|t| t == doc_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScoringConfig::default();
        assert_eq!(config.identifier_weight, 3.0);
        assert_eq!(config.framework_weight, 2.5);
        assert_eq!(config.language_weight, 2.0);
        assert_eq!(config.description_weight, 1.5);
        assert_eq!(config.content_fallback_weight, 0.5);
        assert_eq!(config.completeness_multiplier, 2.0);
        assert_eq!(config.exact_framework_bonus, 5.0);
        assert_eq!(config.name_bonus, 2.0);
        assert_eq!(config.empty_query_score, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_weight() {
        let config = ScoringConfig {
            framework_weight: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_weight() {
        let config = ScoringConfig {
            name_bonus: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_query_score() {
        let config = ScoringConfig {
            empty_query_score: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bonus_types() {
        let config = ScoringConfig::default();
        assert!(config.is_bonus_type("recipe"));
        assert!(config.is_bonus_type("patterns"));
        assert!(!config.is_bonus_type("service"));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"exact_framework_bonus": 8.0}"#).unwrap();
        assert_eq!(config.exact_framework_bonus, 8.0);
        assert_eq!(config.identifier_weight, 3.0);
        assert_eq!(config.bonus_types, vec!["recipe", "patterns"]);
    }
}
