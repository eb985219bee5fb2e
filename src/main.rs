use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docsum::application::ports::FileLoader;
use docsum::application::services::UploadService;
use docsum::domain::ContentType;
use docsum::infrastructure::observability::{TracingConfig, init_tracing};
use docsum::infrastructure::storage::LocalStagingStore;
use docsum::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter, TesseractAdapter};
use docsum::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env());

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    tracing::info!(
        %environment,
        upload_dir = %settings.upload.directory,
        tesseract_cmd = %settings.ocr.tesseract_cmd,
        "Configuration loaded"
    );

    let staging_store = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.upload.directory))
            .context("failed to create upload directory")?,
    );

    let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
    let ocr_adapter: Arc<dyn FileLoader> = Arc::new(TesseractAdapter::new(
        &settings.ocr.tesseract_cmd,
        settings.ocr.language.clone(),
    ));
    let file_loader = Arc::new(CompositeFileLoader::new(vec![
        (ContentType::Pdf, pdf_adapter),
        (ContentType::Image, ocr_adapter),
    ]));

    let upload_service = Arc::new(UploadService::new(
        file_loader,
        staging_store,
        settings.upload.max_file_size_bytes,
    ));

    let state = AppState {
        upload_service,
        max_request_body_bytes: settings.upload.max_request_body_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
