use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// OCR through an external `tesseract` executable.
pub struct TesseractAdapter {
    command: PathBuf,
    language: Option<String>,
}

impl TesseractAdapter {
    pub fn new(command: impl Into<PathBuf>, language: Option<String>) -> Self {
        Self {
            command: command.into(),
            language,
        }
    }
}

#[async_trait]
impl FileLoader for TesseractAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(filename = %document.filename, command = %self.command.display())
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Image {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_label().to_string(),
            ));
        }

        let mut command = Command::new(&self.command);
        command.arg(path).arg("stdout");
        if let Some(language) = &self.language {
            command.arg("-l").arg(language);
        }

        let output = command.output().await.map_err(|e| {
            FileLoaderError::ExtractionFailed(format!(
                "failed to run {}: {e}",
                self.command.display()
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FileLoaderError::ExtractionFailed(format!(
                "{} exited with {}: {}",
                self.command.display(),
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::info!(chars = text.len(), "Image OCR complete");

        Ok(text)
    }
}
