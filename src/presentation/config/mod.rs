mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_MAX_REQUEST_BODY_BYTES, OcrSettings, ServerSettings,
    Settings, UploadSettings,
};
