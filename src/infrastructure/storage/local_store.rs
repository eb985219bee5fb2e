use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::{StagedFile, StagingStore, StagingStoreError};

/// Stages uploads as plain files inside a single working directory.
pub struct LocalStagingStore {
    root: PathBuf,
}

impl LocalStagingStore {
    pub fn new(root: PathBuf) -> Result<Self, io::Error> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StagedFile, StagingStoreError> {
        // Only the final component is used so a crafted filename cannot escape the root.
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| StagingStoreError::InvalidFilename(filename.to_string()))?;

        let staged = StagedFile::new(self.root.join(name));
        tokio::fs::write(staged.path(), data).await?;

        Ok(staged)
    }
}
