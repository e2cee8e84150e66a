//! Axum route handler for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::advisor::{extract_resume_skills, ExtractedSkills};
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::resume::{extract_text, ResumeKind};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

struct UploadedResume {
    kind: ResumeKind,
    data: Bytes,
}

/// POST /api/v1/resume/skills
///
/// Multipart form with `name`, `email` and a `resume` file (PDF or DOCX).
/// Returns the model's raw skill list and its comma-split tokens.
pub async fn handle_resume_skills(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedSkills>, AppError> {
    let mut profile = Profile::default();
    let mut upload: Option<UploadedResume> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form upload: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" | "email" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid {field_name} field: {e}")))?;
                if field_name == "name" {
                    profile.name = value;
                } else {
                    profile.email = value;
                }
            }
            RESUME_FIELD => {
                let kind = ResumeKind::detect(field.content_type(), field.file_name())
                    .ok_or_else(|| {
                        AppError::Validation("Upload your resume as a PDF or DOCX file".to_string())
                    })?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                upload = Some(UploadedResume { kind, data });
            }
            other => warn!("Ignoring unexpected form field '{other}'"),
        }
    }

    profile.require()?;
    let upload = upload.ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;

    info!(
        "Extracting text from {:?} resume ({} bytes)",
        upload.kind,
        upload.data.len()
    );
    let resume_text = tokio::task::spawn_blocking(move || extract_text(upload.kind, &upload.data))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    if resume_text.trim().is_empty() {
        warn!("Resume produced no text; skill extraction will see an empty document");
    }

    let extracted = extract_resume_skills(state.llm.as_ref(), &resume_text).await?;
    Ok(Json(extracted))
}
