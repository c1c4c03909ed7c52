use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{extract_pdf_text, ExtractError};

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub ok: bool,
    pub text: String,
}

/// POST /api/extract-pdf
///
/// Multipart upload with a `file` field. Returns the text of the first three pages.
pub async fn handle_extract_pdf(
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut pdf = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
            pdf = Some(bytes);
            break;
        }
    }

    let pdf = pdf.ok_or_else(|| {
        AppError::Validation("PDF only. Upload a PDF file or paste text instead.".to_string())
    })?;

    // pdf-extract is CPU-bound and synchronous, and can panic on malformed input
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&pdf))
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("PDF extraction panicked");
                AppError::Unprocessable(ExtractError::Unreadable(String::new()).to_string())
            } else {
                AppError::Internal(e.into())
            }
        })?
        .map_err(|e| {
            if let ExtractError::Unreadable(detail) = &e {
                warn!("PDF extraction failed: {detail}");
            }
            AppError::Unprocessable(e.to_string())
        })?;

    info!(chars = text.chars().count(), "PDF text extracted");
    Ok(Json(ExtractResponse { ok: true, text }))
}
