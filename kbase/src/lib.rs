//! # Kbase
//!
//! A small in-memory knowledge base for platform documentation. At start-up a
//! fixed set of JSON documents (services, recipes, patterns, runtime
//! configurations) is indexed by a semantic identifier of the form
//! `{type}/{name}`, after which the index can be searched by keyword or
//! queried by identifier.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kbase::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let knowledge = KnowledgeBase::from_config(&KbConfig::default())?;
//!
//!     for hit in knowledge.search("laravel, postgresql", Some(5)) {
//!         println!("{} ({:.2})", hit.id, hit.score);
//!     }
//!
//!     let recipe = knowledge.get("recipe/laravel-jetstream")?;
//!     println!("{}", recipe.content);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **storage**: document sources, identifier derivation and the immutable
//!   [`storage::DocumentStore`]
//! - **search**: query parsing and the weighted term-matching
//!   [`search::ScoreCalculator`]
//! - **core**: the [`core::KnowledgeBase`] tying search and lookup together
//!
//! The store is built once and never mutated afterwards, so a
//! `KnowledgeBase` can be shared between request handlers without locking.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod search;
pub mod storage;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigBuilder, ConfigLoader, KbConfig, LogLevel};
    pub use crate::core::KnowledgeBase;
    pub use crate::models::{ContentView, KnowledgeDocument, SearchResult};
    pub use crate::search::{ScoreCalculator, ScoringConfig};
    pub use crate::storage::{DirectorySource, DocumentSource, DocumentStore, MemorySource};
    pub use crate::{KbError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for knowledge base operations
#[derive(Debug, thiserror::Error)]
pub enum KbError {
    /// Error while reading documents or building the index
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LogError),

    /// No document is indexed under the requested identifier
    #[error("Knowledge '{0}' not found")]
    NotFound(String),

    /// Scoring weights rejected by validation
    #[error("Invalid scoring configuration: {0}")]
    InvalidScoring(String),
}

/// Result type for knowledge base operations
pub type Result<T> = std::result::Result<T, KbError>;
