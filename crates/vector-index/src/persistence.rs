use crate::error::{IndexError, Result};
use crate::index::VectorIndex;
use crate::types::EmbeddedChunk;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk form: the dimension tag rides alongside the entries so a later
/// load can compare against the active provider before any query runs.
#[derive(Serialize)]
struct PersistedIndexRef<'a> {
    dimension: usize,
    entries: &'a [EmbeddedChunk],
}

#[derive(Deserialize)]
struct PersistedIndex {
    dimension: usize,
    entries: Vec<EmbeddedChunk>,
}

/// Durable storage for a [`VectorIndex`] as a single JSON file
///
/// Saves go through a temp file followed by a rename, so a crash mid-save
/// leaves either the previous complete file or none at all — never a
/// partial file that a later load would silently accept.
#[derive(Debug, Clone)]
pub struct IndexPersistence {
    path: PathBuf,
}

impl IndexPersistence {
    /// Create persistence bound to a file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this persistence reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the index atomically
    pub async fn save(&self, index: &VectorIndex) -> Result<()> {
        log::info!(
            "Saving index ({} vectors, dim {}) to {:?}",
            index.len(),
            index.dimension(),
            self.path
        );

        let payload = PersistedIndexRef {
            dimension: index.dimension(),
            entries: index.entries(),
        };
        let data = serde_json::to_string(&payload)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data.as_bytes()).await?;
        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err.into());
        }

        log::info!("Index saved");
        Ok(())
    }

    /// Load the index, if one has been saved
    ///
    /// Returns `Ok(None)` when no file exists yet. A file that exists but
    /// cannot be parsed, or whose entries disagree with its dimension tag,
    /// is a hard error — never silently treated as an empty index.
    pub async fn load(&self) -> Result<Option<VectorIndex>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No saved index at {:?}", self.path);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let persisted: PersistedIndex = serde_json::from_str(&data)?;
        let index =
            VectorIndex::from_parts(persisted.dimension, persisted.entries).map_err(|err| {
                IndexError::corrupt(format!(
                    "entry disagrees with dimension tag in {:?}: {err}",
                    self.path
                ))
            })?;

        log::info!(
            "Loaded index from {:?}: {} vectors, dim {}",
            self.path,
            index.len(),
            index.dimension()
        );
        Ok(Some(index))
    }
}
