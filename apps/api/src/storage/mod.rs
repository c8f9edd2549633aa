//! Blob Store: flat name -> bytes storage for generated documents.
//!
//! Default: `FsBlobStore` (one directory on local disk).
//! Tests: `MemoryBlobStore`.
//!
//! Carried in `AppState` as `Arc<dyn BlobStore>`. Writes are unsynchronized:
//! concurrent writes to the same name race and the last one wins.

use std::io;
use std::path::{Component, Path, PathBuf};
#[cfg(test)]
use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `name`, replacing any previous content.
    async fn write(&self, name: &str, bytes: Bytes) -> io::Result<()>;

    /// Returns the content stored under `name`, or `None` if there is none.
    async fn read(&self, name: &str) -> io::Result<Option<Bytes>>;
}

/// True when `name` is exactly one ordinary path component.
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Filesystem
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Opens (and creates if needed) the storage directory.
    pub async fn open(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        info!(root = %root.display(), "Blob store ready");
        Ok(FsBlobStore { root })
    }

    #[cfg(test)]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn write(&self, name: &str, bytes: Bytes) -> io::Result<()> {
        if !is_plain_name(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{name}' is not a plain file name"),
            ));
        }
        let path = self.root.join(name);
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "Wrote blob");
        Ok(())
    }

    async fn read(&self, name: &str) -> io::Result<Option<Bytes>> {
        if !is_plain_name(name) {
            return Ok(None);
        }
        match tokio::fs::read(self.root.join(name)).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Bytes>>,
}

#[cfg(test)]
impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
fn poisoned() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "blob store lock poisoned")
}

#[cfg(test)]
#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn write(&self, name: &str, bytes: Bytes) -> io::Result<()> {
        self.blobs
            .write()
            .map_err(|_| poisoned())?
            .insert(name.to_string(), bytes);
        Ok(())
    }

    async fn read(&self, name: &str) -> io::Result<Option<Bytes>> {
        Ok(self.blobs.read().map_err(|_| poisoned())?.get(name).cloned())
    }
}
