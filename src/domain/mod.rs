mod document;
mod summary;
mod upload;

pub use document::{ContentType, Document, sanitize_filename};
pub use summary::Summary;
pub use upload::UploadedFile;
