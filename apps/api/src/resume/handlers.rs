use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract::{extract_resume, ExtractedResume};
use crate::state::AppState;

/// POST /api/parse-resume
///
/// Accepts a multipart upload with a `file` part holding a PDF, extracts its
/// text, and returns the LLM-structured profile data.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedResume>, AppError> {
    let mut file_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if field.file_name().map_or(true, str::is_empty) {
            return Err(AppError::Validation("No selected file".to_string()));
        }
        file_bytes = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?,
        );
        break;
    }

    let file_bytes = file_bytes.ok_or_else(|| AppError::Validation("No file part".to_string()))?;

    info!("Parsing uploaded resume ({} bytes)", file_bytes.len());
    let extracted = extract_resume(&file_bytes, &state.llm).await?;

    Ok(Json(extracted))
}
