//! Index construction from a document source.

use tracing::{debug, info, warn};

use super::errors::StorageResult;
use super::identity::derive_identity;
use super::source::DocumentSource;
use super::store::DocumentStore;
use crate::models::KnowledgeDocument;

/// Outcome of building a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Documents parsed and stored, including ones later replaced
    pub indexed: usize,

    /// Entries dropped for a bad path or unparseable content
    pub skipped: usize,

    /// Stores that overwrote an existing identifier
    pub replaced: usize,
}

/// Build a [`DocumentStore`] from every entry of `source`.
///
/// Entries whose path yields no identity, or whose content is not valid
/// JSON, are skipped. When two entries derive the same identifier the later
/// one wins and a warning is logged.
pub fn build_store(
    source: &dyn DocumentSource,
    extension: &str,
) -> StorageResult<(DocumentStore, IndexReport)> {
    let mut store = DocumentStore::new();
    let mut report = IndexReport::default();

    for entry in source.entries()? {
        let Some(identity) = derive_identity(&entry.path, extension) else {
            debug!("Skipping {}: no type directory or wrong extension", entry.path);
            report.skipped += 1;
            continue;
        };

        let document = match KnowledgeDocument::from_slice(
            identity.id,
            identity.name,
            identity.doc_type,
            &entry.bytes,
        ) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping malformed document {}: {}", entry.path, e);
                report.skipped += 1;
                continue;
            }
        };

        let id = document.id.clone();
        report.indexed += 1;
        if store.put(document).is_some() {
            warn!("Document {} replaced an earlier entry with id '{}'", entry.path, id);
            report.replaced += 1;
        }
    }

    info!(
        "Indexed {} knowledge items from {} ({} skipped, {} replaced)",
        store.len(),
        source.describe(),
        report.skipped,
        report.replaced
    );

    Ok((store, report))
}
