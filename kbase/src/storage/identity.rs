//! Semantic identifier derivation.
//!
//! A document at `service/nodejs.json` becomes `service/nodejs`. Files named
//! `recipe-*` are recipes wherever they live: `apps/recipe-laravel.json`
//! becomes `recipe/laravel`.

/// Filename prefix marking a recipe regardless of its directory
pub const RECIPE_PREFIX: &str = "recipe-";

/// Type assigned to documents carrying [`RECIPE_PREFIX`]
pub const RECIPE_TYPE: &str = "recipe";

/// Identifier, name and type derived from a document's location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentity {
    pub id: String,
    pub name: String,
    pub doc_type: String,
}

/// Derive the identity of a document from its `/`-separated path relative
/// to the source root.
///
/// The immediate parent directory is the type and the file stem is the
/// name. Returns `None` when the path lacks a parent directory, does not
/// end in `.{extension}`, or would yield an empty type or name.
pub fn derive_identity(path: &str, extension: &str) -> Option<DocumentIdentity> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return None;
    }

    let file = segments[segments.len() - 1];
    let mut doc_type = segments[segments.len() - 2];

    let mut name = file.strip_suffix(extension)?.strip_suffix('.')?;
    if let Some(stripped) = name.strip_prefix(RECIPE_PREFIX) {
        name = stripped;
        doc_type = RECIPE_TYPE;
    }

    if name.is_empty() || doc_type.is_empty() {
        return None;
    }

    Some(DocumentIdentity {
        id: format!("{doc_type}/{name}"),
        name: name.to_string(),
        doc_type: doc_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(path: &str) -> Option<DocumentIdentity> {
        derive_identity(path, "json")
    }

    #[test]
    fn test_parent_directory_is_type() {
        let id = identity("service/nodejs.json").unwrap();
        assert_eq!(id.id, "service/nodejs");
        assert_eq!(id.name, "nodejs");
        assert_eq!(id.doc_type, "service");
    }

    #[test]
    fn test_only_immediate_parent_counts() {
        let id = identity("platform/runtimes/php-apache.json").unwrap();
        assert_eq!(id.id, "runtimes/php-apache");
    }

    #[test]
    fn test_recipe_prefix_forces_recipe_type() {
        let id = identity("frameworks/php/recipe-laravel-jetstream.json").unwrap();
        assert_eq!(id.id, "recipe/laravel-jetstream");
        assert_eq!(id.name, "laravel-jetstream");
        assert_eq!(id.doc_type, "recipe");
    }

    #[test]
    fn test_rejects_paths_without_type_directory() {
        assert_eq!(identity("nodejs.json"), None);
        assert_eq!(identity(""), None);
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert_eq!(identity("service/nodejs.yaml"), None);
        assert_eq!(identity("service/nodejs"), None);
        assert_eq!(identity("service/nodejsjson"), None);
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert_eq!(identity("service/.json"), None);
        assert_eq!(identity("recipes/recipe-.json"), None);
        assert_eq!(identity("/nodejs.json"), None);
    }

    #[test]
    fn test_custom_extension() {
        let id = derive_identity("patterns/blue-green.kb", "kb").unwrap();
        assert_eq!(id.id, "patterns/blue-green");
    }
}
