use std::io;
use std::path::{Path, PathBuf};

/// Persists uploaded bytes on local disk so extractors can read them by path.
#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StagedFile, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A staged file that lives until it is removed or dropped.
///
/// Dropping the handle deletes the file synchronously, so the file never
/// outlives the request that created it, even if the request future is
/// cancelled midway.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    removed: bool,
}

impl StagedFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file. On failure the handle still retries once on drop.
    pub async fn remove(mut self) -> Result<(), StagingStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                self.removed = true;
                tracing::info!(path = %self.path.display(), "Temporary file deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.removed = true;
                Ok(())
            }
            Err(e) => Err(StagingStoreError::Io(e)),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Temporary file deleted on drop");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to delete temporary file");
            }
        }
    }
}
