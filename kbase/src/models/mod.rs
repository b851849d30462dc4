//! Data model for indexed knowledge and search hits.

mod display;
mod document;
mod result;

pub use display::{extract_tags, format_display_name, summarize};
pub use document::{ContentView, KnowledgeDocument};
pub use result::SearchResult;
