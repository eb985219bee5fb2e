mod health;
mod upload;

pub use health::health_handler;
pub use upload::{DOCUMENT_FIELD, ErrorResponse, SummaryResponse, upload_handler};
