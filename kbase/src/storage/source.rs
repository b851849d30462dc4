//! Document sources: where raw knowledge documents come from.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::errors::{StorageError, StorageResult};

/// A raw document as delivered by a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// `/`-separated path relative to the source root
    pub path: String,

    /// Undecoded document bytes
    pub bytes: Vec<u8>,
}

impl SourceEntry {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

/// A read-only tree of documents.
///
/// Implementations skip individual entries they cannot read and only fail
/// when the source as a whole is unusable.
pub trait DocumentSource: Send + Sync {
    /// Every document-bearing entry in the source
    fn entries(&self) -> StorageResult<Vec<SourceEntry>>;

    /// Short description for log output
    fn describe(&self) -> String;
}

/// Documents read from a directory tree on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Read `*.{extension}` files below `root`
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str())
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(segments.join("/"))
    }
}

impl DocumentSource for DirectorySource {
    fn entries(&self) -> StorageResult<Vec<SourceEntry>> {
        if !self.root.is_dir() {
            return Err(StorageError::SourceNotFound(self.root.clone()));
        }

        let mut entries = Vec::new();

        for item in WalkDir::new(&self.root).sort_by_file_name() {
            let item = match item {
                Ok(item) => item,
                Err(e) if e.depth() == 0 => return Err(StorageError::Walk(e)),
                Err(e) => {
                    warn!("Skipping unreadable path in {}: {}", self.root.display(), e);
                    continue;
                }
            };

            let path = item.path();
            if !item.file_type().is_file() || !self.has_extension(path) {
                continue;
            }

            let Some(relative) = self.relative_path(path) else {
                continue;
            };

            match std::fs::read(path) {
                Ok(bytes) => entries.push(SourceEntry::new(relative, bytes)),
                Err(e) => warn!("Skipping unreadable document {}: {}", path.display(), e),
            }
        }

        debug!(
            "Found {} candidate documents in {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Documents held in memory, e.g. bundled into a binary or built by tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Vec<SourceEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document at `path`
    pub fn with_entry(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.push(path, bytes);
        self
    }

    pub fn push(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.push(SourceEntry::new(path, bytes));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn entries(&self) -> StorageResult<Vec<SourceEntry>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory entries", self.entries.len())
    }
}

impl FromIterator<SourceEntry> for MemorySource {
    fn from_iter<I: IntoIterator<Item = SourceEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
