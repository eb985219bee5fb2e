use std::fmt::Display;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

#[derive(Default)]
pub struct PdfAdapter;

struct PageContent {
    page_number: u32,
    text: String,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<PageContent>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        collect_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))
    }
}

/// Keeps pages with visible text. A page that fails to extract fails the
/// whole document rather than being mistaken for a blank page.
fn collect_pages<E: Display>(
    page_texts: impl IntoIterator<Item = Result<String, E>>,
) -> Result<Vec<PageContent>, FileLoaderError> {
    let mut pages = Vec::new();

    for (page_index, result) in page_texts.into_iter().enumerate() {
        let page_number = (page_index + 1) as u32;
        let text = result.map_err(|e| {
            tracing::warn!(page_number, error = %e, "Failed to extract page text");
            FileLoaderError::ExtractionFailed(format!(
                "failed to extract text from page {page_number}: {e}"
            ))
        })?;

        if !text.trim().is_empty() {
            pages.push(PageContent { page_number, text });
        }
    }

    Ok(pages)
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_label().to_string(),
            ));
        }

        let owned_path: PathBuf = path.to_path_buf();
        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&owned_path))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = pages.len(),
            last_page = pages.last().map(|p| p.page_number),
            "PDF text extraction complete"
        );

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
