//! Collection sources
//!
//! A [`CollectionSource`] resolves a collection name to its items and
//! grouping keys. The application fetches through it at most once per
//! gallery; retries are only issued after a failed fetch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use gallery_core::prelude::*;
use gallery_core::Collection;

/// Collection fetch operations
#[trait_variant::make(CollectionSource: Send)]
pub trait LocalCollectionSource {
    /// Fetch the named collection
    async fn get_collection(&self, name: &str) -> Result<Collection>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Filesystem source
// ─────────────────────────────────────────────────────────────────────────────

/// Reads `<root>/<name>.json` documents
#[derive(Debug, Clone)]
pub struct FsCollectionSource {
    root: PathBuf,
}

impl FsCollectionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document backing `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

impl CollectionSource for FsCollectionSource {
    async fn get_collection(&self, name: &str) -> Result<Collection> {
        let path = self.path_for(name);
        debug!("Fetching collection '{}' from {:?}", name, path);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::collection_not_found(name, path));
            }
            Err(e) => return Err(Error::fetch(format!("{}: {}", path.display(), e))),
        };

        let collection = Collection::from_json(name, &content)?;
        info!(
            "Fetched collection '{}' ({} items, groupings: {:?})",
            name,
            collection.len(),
            collection.groupings
        );
        Ok(collection)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory source
// ─────────────────────────────────────────────────────────────────────────────

/// Serves collections held in memory and counts fetches
#[derive(Debug, Default)]
pub struct MemoryCollectionSource {
    collections: HashMap<String, Collection>,
    fetches: AtomicUsize,
}

impl MemoryCollectionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.collections.insert(collection.name.clone(), collection);
        self
    }

    /// Number of `get_collection` calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CollectionSource for MemoryCollectionSource {
    async fn get_collection(&self, name: &str) -> Result<Collection> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.collections
            .get(name)
            .cloned()
            .ok_or_else(|| Error::collection_not_found(name, "<memory>"))
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectionSource, FsCollectionSource, MemoryCollectionSource};
    use gallery_core::prelude::*;
    use gallery_core::Collection;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fs_source_reads_document() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("travel.json"),
            r#"{
                "items": [
                    {"date": "2020-01-01", "dateString": "Jan 2020", "file": "a.jpg", "category": "street"}
                ],
                "groupings": ["category"]
            }"#,
        )
        .unwrap();

        let source = FsCollectionSource::new(temp.path());
        let collection = source.get_collection("travel").await.unwrap();

        assert_eq!(collection.name, "travel");
        assert_eq!(collection.len(), 1);
        assert!(collection.has_grouping("category"));
    }

    #[tokio::test]
    async fn test_fs_source_missing_collection() {
        let temp = tempdir().unwrap();
        let source = FsCollectionSource::new(temp.path());

        let err = source.get_collection("nope").await.unwrap_err();
        assert!(matches!(err, Error::CollectionNotFound { ref name, .. } if name == "nope"));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_fs_source_malformed_document() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("broken.json"), "{ not json").unwrap();

        let source = FsCollectionSource::new(temp.path());
        let err = source.get_collection("broken").await.unwrap_err();
        assert!(matches!(err, Error::CollectionParse { .. }));
    }

    #[tokio::test]
    async fn test_memory_source_counts_fetches() {
        let source = MemoryCollectionSource::new()
            .with_collection(Collection::new("travel", Vec::new(), Vec::new()));

        assert!(source.get_collection("travel").await.is_ok());
        assert!(source.get_collection("other").await.is_err());
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn test_path_for() {
        let source = FsCollectionSource::new("/data/collections");
        assert_eq!(
            source.path_for("travel"),
            PathBuf::from("/data/collections/travel.json")
        );
    }
}
