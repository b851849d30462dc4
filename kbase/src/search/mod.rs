//! Keyword search scoring
//!
//! This module ranks knowledge documents against a list of query terms using
//! layered substring matching over the identifier, display name and a few
//! well-known content fields.
//!
//! # Overview
//!
//! Each term earns weight for every field it appears in:
//! - identifier or display name
//! - `framework`
//! - `language`
//! - `description`
//! - anywhere else in the raw content (only when nothing above matched)
//!
//! The averaged term score is doubled when every term matched and scaled down
//! by the matched fraction otherwise. Recipes and patterns additionally earn
//! flat bonuses for an exact framework match or a match in their name.
//!
//! # Example
//!
//! ```
//! use kbase::models::KnowledgeDocument;
//! use kbase::search::{ScoreCalculator, parse_query};
//! use serde_json::json;
//!
//! let doc = KnowledgeDocument::new(
//!     "recipe/laravel-jetstream",
//!     "laravel-jetstream",
//!     "recipe",
//!     json!({ "framework": "laravel", "description": "Laravel starter kit" }),
//! );
//!
//! let calculator = ScoreCalculator::default();
//! let score = calculator.score(&doc, &parse_query("Laravel"));
//! assert!(score > 0.0);
//! ```

pub mod calculator;
pub mod query;
pub mod scoring;

pub use calculator::ScoreCalculator;
pub use query::{parse_query, resolve_limit};
pub use scoring::ScoringConfig;
