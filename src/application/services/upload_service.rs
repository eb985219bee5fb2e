use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, StagedFile, StagingStore};
use crate::domain::{ContentType, Document, Summary, UploadedFile, sanitize_filename};

const BYTES_PER_MB: u64 = 1024 * 1024;

pub struct UploadService<F>
where
    F: FileLoader + ?Sized,
{
    file_loader: Arc<F>,
    staging_store: Arc<dyn StagingStore>,
    max_file_size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: Summary,
    pub content_type: ContentType,
}

impl<F> UploadService<F>
where
    F: FileLoader + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        staging_store: Arc<dyn StagingStore>,
        max_file_size_bytes: u64,
    ) -> Self {
        Self {
            file_loader,
            staging_store,
            max_file_size_bytes,
        }
    }

    /// Checks filename, extension and size, returning the document to stage.
    pub fn validate(&self, upload: &UploadedFile) -> Result<Document, ValidationError> {
        if upload.filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }

        let filename = sanitize_filename(&upload.filename);

        let content_type = ContentType::from_filename(&filename)
            .ok_or_else(|| ValidationError::UnsupportedFileType(filename.clone()))?;

        let size = upload.size_bytes();
        if size > self.max_file_size_bytes {
            return Err(ValidationError::FileTooLarge {
                size,
                limit_mb: self.max_file_size_bytes / BYTES_PER_MB,
            });
        }

        Ok(Document::new(filename, content_type, size))
    }

    #[tracing::instrument(skip(self, upload), fields(filename = %upload.filename))]
    pub async fn summarize(&self, upload: UploadedFile) -> Result<SummaryOutcome, UploadError> {
        let document = self.validate(&upload).inspect_err(|e| {
            tracing::error!(error = %e, "Upload rejected");
        })?;

        let staged = self
            .staging_store
            .store(&document.filename, &upload.data)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to save uploaded file");
                UploadError::Processing(e.to_string())
            })?;
        tracing::info!(path = %staged.path().display(), "File saved successfully");

        let result = self.extract_and_summarize(&staged, &document).await;

        if let Err(e) = staged.remove().await {
            tracing::warn!(error = %e, "Failed to delete temporary file");
        }

        result
    }

    async fn extract_and_summarize(
        &self,
        staged: &StagedFile,
        document: &Document,
    ) -> Result<SummaryOutcome, UploadError> {
        let text = match self
            .file_loader
            .extract_text(staged.path(), document)
            .await
        {
            Ok(text) => text,
            Err(FileLoaderError::NoTextFound(_)) => {
                tracing::warn!("Extracted text is empty");
                return Err(UploadError::EmptyExtraction);
            }
            Err(e) => {
                tracing::error!(error = %e, "An error occurred during file processing");
                return Err(UploadError::Processing(e.to_string()));
            }
        };
        tracing::info!(
            content_type = document.content_type.as_label(),
            chars = text.len(),
            "Text extraction completed"
        );

        if text.trim().is_empty() {
            tracing::warn!("Extracted text is empty");
            return Err(UploadError::EmptyExtraction);
        }

        let summary = Summary::from_text(&text);
        tracing::info!("Summary generation completed");

        Ok(SummaryOutcome {
            summary,
            content_type: document.content_type,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No file part in the request.")]
    MissingFile,
    #[error("No file selected.")]
    EmptyFilename,
    #[error("Invalid file type. Only PDF and image files are supported.")]
    UnsupportedFileType(String),
    #[error("File size exceeds {limit_mb}MB. Please upload a smaller file.")]
    FileTooLarge { size: u64, limit_mb: u64 },
    #[error("Failed to read multipart: {0}")]
    MalformedRequest(String),
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unable to extract text from the file.")]
    EmptyExtraction,
    #[error("An error occurred: {0}")]
    Processing(String),
}
