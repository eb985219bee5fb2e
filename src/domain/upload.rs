use bytes::Bytes;

/// A file received in the `document` multipart field, before validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
    /// Size announced by the part's `Content-Length` header, if any.
    pub declared_size: Option<u64>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: Bytes, declared_size: Option<u64>) -> Self {
        Self {
            filename: filename.into(),
            data,
            declared_size,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.declared_size
            .unwrap_or(0)
            .max(self.data.len() as u64)
    }
}
