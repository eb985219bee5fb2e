use std::path::Path;
use std::sync::Arc;

use docsum::application::ports::{FileLoader, FileLoaderError};
use docsum::domain::{ContentType, Document};
use docsum::infrastructure::text_processing::CompositeFileLoader;

struct LabelLoader(&'static str);

#[async_trait::async_trait]
impl FileLoader for LabelLoader {
    async fn extract_text(&self, _path: &Path, _doc: &Document) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

fn document(content_type: ContentType) -> Document {
    Document::new("file".to_string(), content_type, 1)
}

#[tokio::test]
async fn given_registered_types_when_loading_then_routes_by_content_type() {
    let pdf: Arc<dyn FileLoader> = Arc::new(LabelLoader("from pdf"));
    let image: Arc<dyn FileLoader> = Arc::new(LabelLoader("from ocr"));
    let loader = CompositeFileLoader::new(vec![
        (ContentType::Pdf, pdf),
        (ContentType::Image, image),
    ]);
    let path = Path::new("unused");

    let pdf_text = loader
        .extract_text(path, &document(ContentType::Pdf))
        .await
        .unwrap();
    let image_text = loader
        .extract_text(path, &document(ContentType::Image))
        .await
        .unwrap();

    assert_eq!(pdf_text, "from pdf");
    assert_eq!(image_text, "from ocr");
}

#[tokio::test]
async fn given_unregistered_type_when_loading_then_returns_unsupported() {
    let pdf: Arc<dyn FileLoader> = Arc::new(LabelLoader("from pdf"));
    let loader = CompositeFileLoader::new(vec![(ContentType::Pdf, pdf)]);

    let result = loader
        .extract_text(Path::new("unused"), &document(ContentType::Image))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
