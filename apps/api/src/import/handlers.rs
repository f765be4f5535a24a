use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::DocumentKind;
use crate::import::parse_resume_text;
use crate::models::resume::ResumeState;
use crate::state::{AppState, ResumeDocument};

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    /// Section fields the parse actually (re)populated.
    pub sections_imported: Vec<&'static str>,
    pub revision: u64,
    pub resume: ResumeState,
}

/// POST /api/v1/resume/import
///
/// Accepts a multipart upload (field `file`), extracts its text, and runs the
/// heuristic parse against the shared resume document. Extraction-stage
/// errors abort before the document is touched; the write lock is held for
/// the whole parse so one import is one logical transaction.
pub async fn handle_import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            upload = Some((content_type, file_name, data));
            break;
        }
    }
    let (content_type, file_name, data) =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".into()))?;

    let kind = DocumentKind::detect(content_type.as_deref(), file_name.as_deref())?;
    info!(
        kind = kind.label(),
        bytes = data.len(),
        file = file_name.as_deref().unwrap_or("<unnamed>"),
        "Importing resume"
    );

    // Extraction can be heavy (multi-page PDFs parse synchronously to
    // completion), so it runs off the async worker threads.
    let extractor = state.extractors.get(kind)?;
    let text = tokio::task::spawn_blocking(move || extractor.extract(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))??;

    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let mut doc = state.resume.write().await;
    let report = parse_resume_text(&mut doc.resume, &text, &state.segmenter);
    doc.touch();
    info!(
        revision = doc.revision,
        sections = ?report.sections,
        "Resume import complete"
    );

    Ok(Json(ImportResponse {
        message: "Resume imported! Please review and edit.".to_string(),
        sections_imported: report.sections,
        revision: doc.revision,
        resume: doc.resume.clone(),
    }))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeDocument> {
    Json(state.resume.read().await.clone())
}

/// PUT /api/v1/resume
///
/// Full-document replace: the form UI's save path. Thin by design — all
/// structure comes from the client.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Json(resume): Json<ResumeState>,
) -> Json<ResumeDocument> {
    let mut doc = state.resume.write().await;
    doc.resume = resume;
    doc.touch();
    Json(doc.clone())
}
