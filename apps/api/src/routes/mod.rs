pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers::handle_career_assessment;
use crate::learning_path::handlers::{handle_get_learning_path, handle_update_progress};
use crate::profile::handlers::handle_sync_profile;
use crate::resume::handlers::handle_parse_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/parse-resume", post(handle_parse_resume))
        .route("/api/sync-profile", post(handle_sync_profile))
        .route("/api/career-assessment", post(handle_career_assessment))
        .route("/api/learning-path", get(handle_get_learning_path))
        .route("/api/progress", post(handle_update_progress))
        .with_state(state)
}
