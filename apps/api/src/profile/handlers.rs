use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::sync::{ensure_skills, resync_user_skills, upsert_profile, ProfilePayload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SyncProfileRequest {
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub profile: ProfilePayload,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncProfileResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/sync-profile
///
/// Upserts the profile row, ensures every skill name exists in `skills`,
/// then fully resyncs the `user_skills` junction for the user.
pub async fn handle_sync_profile(
    State(state): State<AppState>,
    Json(request): Json<SyncProfileRequest>,
) -> Result<Json<SyncProfileResponse>, AppError> {
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;

    upsert_profile(&state.db, user_id, &request.profile).await?;

    let skill_ids = ensure_skills(&state.db, &request.skills).await?;
    resync_user_skills(&state.db, user_id, &skill_ids).await?;

    Ok(Json(SyncProfileResponse {
        success: true,
        message: "Profile synced successfully".to_string(),
    }))
}
