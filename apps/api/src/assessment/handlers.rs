use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::assessment::assess::{run_assessment, Assessment};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerAssessmentRequest {
    pub user_id: Option<Uuid>,
    pub target_role: Option<String>,
    pub resume_text: Option<String>,
}

/// POST /api/career-assessment
///
/// Scores the resume against the target role via the LLM, stores the result
/// as a new assessment row, and returns the assessment JSON.
pub async fn handle_career_assessment(
    State(state): State<AppState>,
    Json(request): Json<CareerAssessmentRequest>,
) -> Result<Json<Assessment>, AppError> {
    let (user_id, target_role, resume_text) = match (
        request.user_id,
        request.target_role.as_deref().map(str::trim),
        request.resume_text.as_deref().map(str::trim),
    ) {
        (Some(user_id), Some(target_role), Some(resume_text))
            if !target_role.is_empty() && !resume_text.is_empty() =>
        {
            (user_id, target_role, resume_text)
        }
        _ => {
            return Err(AppError::Validation(
                "user_id, target_role, and resume_text are required".to_string(),
            ))
        }
    };

    let assessment = run_assessment(&state.db, &state.llm, user_id, target_role, resume_text).await?;

    Ok(Json(assessment))
}
