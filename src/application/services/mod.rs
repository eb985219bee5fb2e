mod upload_service;

pub use upload_service::{SummaryOutcome, UploadError, UploadService, ValidationError};
