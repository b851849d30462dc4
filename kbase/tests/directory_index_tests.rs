//! Indexing and searching real directory trees.

use std::fs;
use std::path::Path;

use kbase::config::ConfigBuilder;
use kbase::prelude::*;
use kbase::storage::{StorageError, build_store};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "service/nodejs.json",
        r#"{"description": "JavaScript runtime for server-side applications", "language": "JavaScript"}"#,
    );
    write(
        root,
        "service/postgresql.json",
        r#"{"description": "Relational database", "tags": ["database", "sql"], "ports": [5432]}"#,
    );
    write(
        root,
        "recipes/recipe-laravel-jetstream.json",
        r#"{"framework": "Laravel", "language": "PHP", "description": "Laravel starter kit"}"#,
    );
    write(
        root,
        "patterns/queue-worker.json",
        r#"{"framework": "laravel-horizon", "type": "worker", "description": "Background jobs"}"#,
    );
    write(root, "service/broken.json", "{\"description\": ");
    write(root, "service/notes.md", "# not a document");
    write(root, "orphan.json", r#"{"description": "no type directory"}"#);

    dir
}

fn config_for(dir: &TempDir) -> KbConfig {
    ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap()
}

#[test]
fn test_directory_index_skips_bad_entries() {
    let dir = sample_tree();
    let source = DirectorySource::new(dir.path(), "json");

    let (store, report) = build_store(&source, "json").unwrap();

    let ids: Vec<&str> = store.ids().collect();
    assert_eq!(
        ids,
        vec![
            "patterns/queue-worker",
            "recipe/laravel-jetstream",
            "service/nodejs",
            "service/postgresql",
        ]
    );
    assert_eq!(report.indexed, 4);
    assert_eq!(report.replaced, 0);
    assert!(report.skipped >= 2);
}

#[test]
fn test_recipe_prefix_round_trip() {
    let dir = sample_tree();
    let knowledge = KnowledgeBase::from_config(&config_for(&dir)).unwrap();

    let recipe = knowledge.get("recipe/laravel-jetstream").unwrap();
    assert_eq!(recipe.doc_type, "recipe");
    assert_eq!(recipe.name, "laravel-jetstream");
    assert_eq!(recipe.content["framework"], "Laravel");
    assert!(knowledge.get("recipes/recipe-laravel-jetstream").is_err());
}

#[test]
fn test_framework_query_prefers_exact_recipe() {
    let dir = sample_tree();
    let knowledge = KnowledgeBase::from_config(&config_for(&dir)).unwrap();

    let results = knowledge.search("Laravel", None);
    let ids: Vec<&str> = results.iter().map(|hit| hit.id.as_str()).collect();

    assert_eq!(ids, vec!["recipe/laravel-jetstream", "patterns/queue-worker"]);
    assert!(results[0].score > results[1].score);
    assert_eq!(results[0].name, "Laravel Jetstream");
    assert_eq!(results[0].tags, vec!["recipe", "laravel", "php"]);
    assert_eq!(results[1].tags, vec!["patterns", "laravel-horizon", "worker"]);
}

#[test]
fn test_content_fallback_and_declared_tags() {
    let dir = sample_tree();
    let knowledge = KnowledgeBase::from_config(&config_for(&dir)).unwrap();

    let results = knowledge.search("5432", None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "service/postgresql");
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].tags, vec!["service", "database", "sql"]);
}

#[test]
fn test_empty_query_lists_everything() {
    let dir = sample_tree();
    let knowledge = KnowledgeBase::from_config(&config_for(&dir)).unwrap();

    let results = knowledge.search("", None);
    assert_eq!(results.len(), knowledge.len());
    assert!(results.iter().all(|hit| (hit.score - 0.1).abs() < 1e-12));
}

#[test]
fn test_identifier_collision_last_wins() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "aaa/recipe-django.json", r#"{"description": "first"}"#);
    write(dir.path(), "recipe/django.json", r#"{"description": "second"}"#);

    let source = DirectorySource::new(dir.path(), "json");
    let (store, report) = build_store(&source, "json").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(report.replaced, 1);
    assert_eq!(
        store.get("recipe/django").unwrap().content["description"],
        "second"
    );
}

#[test]
fn test_missing_data_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_data_dir(dir.path().join("absent"))
        .build()
        .unwrap();

    assert!(matches!(
        KnowledgeBase::from_config(&config),
        Err(KbError::Storage(StorageError::SourceNotFound(_)))
    ));
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "service/redis.kb", r#"{"description": "cache"}"#);
    write(dir.path(), "service/valkey.json", r#"{"description": "cache"}"#);

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .with_extension("kb")
        .build()
        .unwrap();
    let knowledge = KnowledgeBase::from_config(&config).unwrap();

    assert_eq!(knowledge.len(), 1);
    assert!(knowledge.get("service/redis").is_ok());
}

#[test]
fn test_root_level_files_do_not_take_the_root_name_as_type() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");
    write(&root, "stray.json", r#"{"description": "no type directory"}"#);
    write(&root, "service/redis.json", r#"{"description": "cache"}"#);

    let config = ConfigBuilder::new().with_data_dir(&root).build().unwrap();
    let knowledge = KnowledgeBase::from_config(&config).unwrap();

    assert_eq!(knowledge.len(), 1);
    assert!(knowledge.get("service/redis").is_ok());
    assert!(knowledge.get("data/stray").is_err());
}
