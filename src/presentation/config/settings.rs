use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub ocr: OcrSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub directory: String,
    pub max_file_size_bytes: u64,
    pub max_request_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub tesseract_cmd: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>` and `APP__`-style
    /// environment variables (e.g. `APP_UPLOAD__DIRECTORY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000_i64)?
            .set_default("upload.directory", "uploads")?
            .set_default(
                "upload.max_file_size_bytes",
                DEFAULT_MAX_FILE_SIZE_BYTES as i64,
            )?
            .set_default(
                "upload.max_request_body_bytes",
                DEFAULT_MAX_REQUEST_BODY_BYTES as i64,
            )?
            .set_default("ocr.tesseract_cmd", "tesseract")?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
