//! Document storage for the knowledge base.
//!
//! Documents are read from a [`DocumentSource`], given a semantic identifier
//! by [`identity::derive_identity`], and collected into a [`DocumentStore`]
//! by [`indexer::build_store`]. The store is immutable once built.

pub mod errors;
pub mod identity;
pub mod indexer;
pub mod source;
mod store;

pub use errors::{StorageError, StorageResult};
pub use identity::{DocumentIdentity, derive_identity};
pub use indexer::{IndexReport, build_store};
pub use source::{DirectorySource, DocumentSource, MemorySource, SourceEntry};
pub use store::DocumentStore;
