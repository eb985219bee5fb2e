mod file_loader;
mod staging_store;

pub use file_loader::{FileLoader, FileLoaderError};
pub use staging_store::{StagedFile, StagingStore, StagingStoreError};
