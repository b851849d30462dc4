//! In-memory document store

use std::collections::BTreeMap;

use crate::models::KnowledgeDocument;

/// Documents keyed by semantic identifier.
///
/// Iteration is in ascending identifier order so that anything derived from
/// [`DocumentStore::all`] is reproducible.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: BTreeMap<String, KnowledgeDocument>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, returning the one it replaced if the identifier
    /// was already taken.
    pub fn put(&mut self, document: KnowledgeDocument) -> Option<KnowledgeDocument> {
        self.documents.insert(document.id.clone(), document)
    }

    /// Look up a document by identifier
    pub fn get(&self, id: &str) -> Option<&KnowledgeDocument> {
        self.documents.get(id)
    }

    /// All documents in identifier order
    pub fn all(&self) -> impl Iterator<Item = &KnowledgeDocument> {
        self.documents.values()
    }

    /// All identifiers in order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<KnowledgeDocument> for DocumentStore {
    fn from_iter<I: IntoIterator<Item = KnowledgeDocument>>(iter: I) -> Self {
        let mut store = Self::new();
        for document in iter {
            store.put(document);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, description: &str) -> KnowledgeDocument {
        let (doc_type, name) = id.split_once('/').unwrap();
        KnowledgeDocument::new(id, name, doc_type, json!({ "description": description }))
    }

    #[test]
    fn test_put_and_get() {
        let mut store = DocumentStore::new();
        assert!(store.put(doc("service/nodejs", "runtime")).is_none());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("service/nodejs").unwrap().name, "nodejs");
        assert!(store.get("service/missing").is_none());
    }

    #[test]
    fn test_put_replaces_existing_id() {
        let mut store = DocumentStore::new();
        store.put(doc("service/nodejs", "first"));
        let replaced = store.put(doc("service/nodejs", "second")).unwrap();

        assert_eq!(replaced.content["description"], "first");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("service/nodejs").unwrap().content["description"], "second");
    }

    #[test]
    fn test_iteration_is_ordered_by_id() {
        let store: DocumentStore = ["service/redis", "recipe/django", "service/nodejs"]
            .into_iter()
            .map(|id| doc(id, ""))
            .collect();

        let ids: Vec<&str> = store.ids().collect();
        assert_eq!(ids, vec!["recipe/django", "service/nodejs", "service/redis"]);
        assert_eq!(store.all().count(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.all().count(), 0);
    }
}
