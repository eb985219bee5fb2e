use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_LENGTH;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::FileLoader;
use crate::application::services::{UploadError, ValidationError};
use crate::domain::{Summary, UploadedFile};
use crate::presentation::state::AppState;

pub const DOCUMENT_FIELD: &str = "document";

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: Summary,
    #[serde(rename = "type")]
    pub content_type: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F>(
    State(state): State<AppState<F>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
{
    tracing::info!("Upload request received");

    let upload = match read_document_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Upload rejected");
            return error_response(&UploadError::Validation(e));
        }
    };

    tracing::debug!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        declared_size = ?upload.declared_size,
        "File data received"
    );

    match state.upload_service.summarize(upload).await {
        Ok(outcome) => {
            tracing::info!("Response prepared successfully");
            (
                StatusCode::OK,
                Json(SummaryResponse {
                    summary: outcome.summary,
                    content_type: outcome.content_type.as_label(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Reads the first file part named `document`; parts without a filename
/// are form values, not files, and are skipped.
async fn read_document_field(multipart: &mut Multipart) -> Result<UploadedFile, ValidationError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::MalformedRequest(e.to_string()))?
    {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let declared_size = field
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let data = field
            .bytes()
            .await
            .map_err(|e| ValidationError::MalformedRequest(e.to_string()))?;

        return Ok(UploadedFile::new(filename, data, declared_size));
    }

    Err(ValidationError::MissingFile)
}

fn error_response(error: &UploadError) -> Response {
    let status = match error {
        UploadError::Validation(_) | UploadError::EmptyExtraction => StatusCode::BAD_REQUEST,
        UploadError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
