use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, MediaKind, MIME_OCTET_STREAM};
use crate::models::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

struct Upload {
    file_name: String,
    mime: String,
    bytes: Bytes,
}

/// POST /api/v1/resume/import
///
/// Multipart upload with a `file` field. Extraction runs on the blocking pool;
/// the extracted text then goes through the same parser as `/resume/parse`.
pub async fn handle_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let upload = read_file_field(&mut multipart).await?;
    info!(
        "Importing '{}' ({} bytes, {})",
        upload.file_name,
        upload.bytes.len(),
        upload.mime
    );

    let limits = state.extraction_limits;
    let text = tokio::task::spawn_blocking(move || extract_text(&upload.bytes, &upload.mime, limits))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))??;

    Ok(Json(state.parser.parse_resume(&text).await))
}

/// POST /api/v1/resume/parse
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }
    Ok(Json(state.parser.parse_resume(&req.text).await))
}

/// First field named `file`. A missing or generic content type is guessed from
/// the file name.
async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e.body_text())))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let declared = field
            .content_type()
            .filter(|mime| !mime.is_empty() && *mime != MIME_OCTET_STREAM)
            .map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file upload: {}", e.body_text())))?;
        let mime =
            declared.unwrap_or_else(|| MediaKind::from_file_name(&file_name).mime().to_string());
        return Ok(Upload {
            file_name,
            mime,
            bytes,
        });
    }
    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}
