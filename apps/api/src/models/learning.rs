use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `user_learning_progress`: a milestone the user has checked off.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningProgressRow {
    pub milestone_title: String,
    pub completed: bool,
}
