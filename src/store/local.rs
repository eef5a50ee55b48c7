//! # Local Directory Backend
//!
//! One UTF-8 JSON file per record in a flat directory. There is no
//! locking: two writers of the same slug race and the last one wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;

use super::backend::ExplanationStore;
use super::errors::{StoreError, StoreResult};
use super::record::StoredExplanation;
use crate::slug::is_valid_slug;

const EXTENSION: &str = "json";

/// Flat-directory explanation store
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|source| StoreError::Io {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory holding the records
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `slug`
    pub fn path_for(&self, slug: &str) -> StoreResult<PathBuf> {
        if !is_valid_slug(slug) {
            return Err(StoreError::InvalidSlug(slug.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", slug, EXTENSION)))
    }
}

/// Pretty JSON with four-space indentation, non-ASCII left as is
fn encode(record: &StoredExplanation) -> StoreResult<Vec<u8>> {
    let mut out = Vec::with_capacity(1024);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    record
        .serialize(&mut ser)
        .map_err(|source| StoreError::Serialize {
            slug: record.slug.clone(),
            source,
        })?;
    Ok(out)
}

#[async_trait]
impl ExplanationStore for FileStore {
    async fn load(&self, slug: &str) -> StoreResult<StoredExplanation> {
        let path = self.path_for(slug)?;
        let bytes = fs::read(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(slug.to_string())
            } else {
                StoreError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: path.display().to_string(),
            source,
        })
    }

    async fn save(&self, record: &StoredExplanation) -> StoreResult<()> {
        let path = self.path_for(&record.slug)?;
        let data = encode(record)?;
        fs::write(&path, data).await.map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    async fn slugs(&self) -> StoreResult<Vec<String>> {
        let io_err = |source| StoreError::Io {
            path: self.root.display().to_string(),
            source,
        };

        let mut entries = fs::read_dir(&self.root).await.map_err(io_err)?;
        let mut slugs = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            // Names `load` would refuse are not advertised
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if is_valid_slug(stem) => slugs.push(stem.to_string()),
                _ => tracing::debug!(path = %path.display(), "skipping non-slug file"),
            }
        }

        Ok(slugs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn record(slug: &str) -> StoredExplanation {
        StoredExplanation {
            topic_raw: "Чёрные дыры".to_string(),
            slug: slug.to_string(),
            level: "simple".to_string(),
            analogy: None,
            explanation_text: "Чёрная дыра – это место, откуда не может выбраться даже свет."
                .to_string(),
            meta_title: "title".to_string(),
            meta_description: "desc...".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 17, 8, 0, 1).unwrap()
                + chrono::Duration::microseconds(123_456),
        }
    }

    #[tokio::test]
    async fn test_save_then_load_is_identical() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();

        let original = record("chiornye-dyry-simple");
        store.save(&original).await.unwrap();

        let loaded = store.load("chiornye-dyry-simple").await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_file_is_pretty_and_keeps_unicode() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        store.save(&record("dyry")).await.unwrap();

        let raw = std::fs::read_to_string(temp.path().join("dyry.json")).unwrap();
        assert!(raw.contains("Чёрные дыры"));
        assert!(raw.contains("\n    \"slug\": \"dyry\""));
    }

    #[tokio::test]
    async fn test_open_creates_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("explanations");
        let store = FileStore::open(&nested).await.unwrap();
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn test_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();

        let result = store.load("nope").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_soft_absence() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        std::fs::write(temp.path().join("broken.json"), b"{not json").unwrap();

        assert!(matches!(
            store.load("broken").await,
            Err(StoreError::Corrupt { .. })
        ));
        assert!(store.get("broken").await.is_none());
    }

    #[tokio::test]
    async fn test_rejects_traversal_slug() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();

        let result = store.load("../secret").await;
        assert!(matches!(result, Err(StoreError::InvalidSlug(_))));
    }

    #[tokio::test]
    async fn test_list_only_json_files() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        store.save(&record("one")).await.unwrap();
        store.save(&record("two")).await.unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(temp.path().join("dir.json")).unwrap();

        let mut slugs = store.list_slugs().await;
        slugs.sort();
        assert_eq!(slugs, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn test_list_skips_names_load_refuses() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path()).await.unwrap();
        store.save(&record("kept-slug")).await.unwrap();
        std::fs::write(temp.path().join("Notes.json"), b"{}").unwrap();
        std::fs::write(temp.path().join("a_b.json"), b"{}").unwrap();

        assert_eq!(store.list_slugs().await, vec!["kept-slug".to_string()]);
    }
}
