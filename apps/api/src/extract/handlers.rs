//! Axum route handlers for file text extraction.

use axum::{extract::Multipart, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::loader::{load_text, LoadedText, UploadedFile};

/// Multipart field name clients use for the uploaded file.
const FILE_FIELD: &str = "file";

/// Pulls the first file field out of a multipart body.
///
/// A body that fails mid-read still yields an `UploadedFile`: the loader turns
/// it into the read-error message rather than an HTTP failure.
pub async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        let file_name = field.file_name().map(str::to_string);
        let is_file = field.name() == Some(FILE_FIELD) || file_name.is_some();
        if !is_file {
            continue;
        }

        let name = file_name.unwrap_or_else(|| "upload".to_string());
        let media_type = field.content_type().map(str::to_string);

        return Ok(match field.bytes().await {
            Ok(bytes) => {
                info!("Received upload '{}' ({} bytes)", name, bytes.len());
                UploadedFile::new(name, media_type, bytes)
            }
            Err(e) => {
                warn!("Upload '{}' could not be read: {}", name, e);
                UploadedFile::unreadable(name, media_type, e.to_string())
            }
        });
    }

    Err(AppError::Validation(format!(
        "multipart body must contain a '{FILE_FIELD}' field"
    )))
}

/// POST /api/v1/extract
///
/// Returns best-effort text for an uploaded résumé. Always 200 once a file
/// field is present; low-confidence and unreadable files carry canned text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<LoadedText>, AppError> {
    let upload = read_upload(&mut multipart).await?;
    Ok(Json(load_text(&upload).await))
}
