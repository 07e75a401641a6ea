use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning_path::capstone::{generate_capstone, CapstoneProject};
use crate::learning_path::progress::{
    clear_milestone, completed_milestones, set_milestone_completed,
};
use crate::learning_path::resources::{find_resources, Resource};
use crate::learning_path::roadmap::{generate_roadmap, mark_completed, Milestone};
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LearningPathQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub target_role: Option<String>,
    pub missing_skills: Vec<String>,
    pub roadmap: Vec<Milestone>,
    pub resources: BTreeMap<String, Vec<Resource>>,
    pub capstone: Option<CapstoneProject>,
}

/// GET /api/learning-path?user_id=...
///
/// Builds the learning path from the user's latest assessment: roadmap from
/// the LLM (with completion state merged in), curated resources per missing
/// skill, and a capstone suggestion.
pub async fn handle_get_learning_path(
    State(state): State<AppState>,
    Query(params): Query<LearningPathQuery>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;

    let assessment: AssessmentRow = sqlx::query_as(
        r#"
        SELECT target_role, feedback, created_at
        FROM user_assessments
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound("No career assessment found. Please upload a resume first.".to_string())
    })?;

    let target_role = assessment.target_role.clone();
    let missing_skills = assessment.missing_skills();
    info!(
        "Building learning path for user {user_id} from assessment at {} ({} missing skills)",
        assessment.created_at,
        missing_skills.len()
    );

    let completed = completed_milestones(&state.db, user_id).await?;

    let role_for_prompt = target_role.as_deref().unwrap_or("their target role");
    let mut roadmap = generate_roadmap(&state.llm, role_for_prompt, &missing_skills).await;
    mark_completed(&mut roadmap, &completed);

    let resources: BTreeMap<String, Vec<Resource>> = missing_skills
        .iter()
        .map(|skill| (skill.clone(), find_resources(skill)))
        .collect();

    let capstone = generate_capstone(&state.llm, &missing_skills).await;

    Ok(Json(LearningPathResponse {
        target_role,
        missing_skills,
        roadmap,
        resources,
        capstone,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub user_id: Option<Uuid>,
    pub milestone_title: Option<String>,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct ProgressUpdateResponse {
    pub success: bool,
}

/// POST /api/progress
///
/// completed=true upserts the milestone row; completed=false deletes it.
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Json(request): Json<ProgressUpdateRequest>,
) -> Result<Json<ProgressUpdateResponse>, AppError> {
    let (user_id, milestone_title) = match (request.user_id, request.milestone_title.as_deref()) {
        (Some(user_id), Some(title)) if !title.trim().is_empty() => (user_id, title),
        _ => {
            return Err(AppError::Validation(
                "user_id and milestone_title are required".to_string(),
            ))
        }
    };

    if request.completed {
        set_milestone_completed(&state.db, user_id, milestone_title).await?;
    } else {
        clear_milestone(&state.db, user_id, milestone_title).await?;
    }

    Ok(Json(ProgressUpdateResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_request_defaults_completed_to_true() {
        let json = r#"{
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "milestone_title": "Week 1: Foundations"
        }"#;
        let parsed: ProgressUpdateRequest = serde_json::from_str(json).unwrap();
        assert!(parsed.completed);
    }

    #[test]
    fn test_progress_request_accepts_explicit_false() {
        let json = r#"{
            "user_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "milestone_title": "Week 1: Foundations",
            "completed": false
        }"#;
        let parsed: ProgressUpdateRequest = serde_json::from_str(json).unwrap();
        assert!(!parsed.completed);
    }

    #[test]
    fn test_learning_path_query_tolerates_missing_user_id() {
        let parsed: LearningPathQuery = serde_json::from_str("{}").unwrap();
        assert!(parsed.user_id.is_none());
    }
}
