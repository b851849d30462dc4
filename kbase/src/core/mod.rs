//! Core knowledge base functionality

pub mod knowledge_base;

pub use knowledge_base::KnowledgeBase;
