use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::UploadService;

pub struct AppState<F>
where
    F: FileLoader + ?Sized,
{
    pub upload_service: Arc<UploadService<F>>,
    pub max_request_body_bytes: usize,
}

impl<F> Clone for AppState<F>
where
    F: FileLoader + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            max_request_body_bytes: self.max_request_body_bytes,
        }
    }
}
