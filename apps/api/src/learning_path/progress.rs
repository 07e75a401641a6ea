//! Milestone progress — point queries against `user_learning_progress`.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::learning::LearningProgressRow;

/// Marks a milestone completed, keyed on (user_id, milestone_title).
pub async fn set_milestone_completed(
    pool: &PgPool,
    user_id: Uuid,
    milestone_title: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO user_learning_progress (user_id, milestone_title, completed)
        VALUES ($1, $2, TRUE)
        ON CONFLICT (user_id, milestone_title) DO UPDATE SET completed = TRUE
        "#,
    )
    .bind(user_id)
    .bind(milestone_title)
    .execute(pool)
    .await?;

    Ok(())
}

/// Un-completes a milestone by deleting its row.
pub async fn clear_milestone(
    pool: &PgPool,
    user_id: Uuid,
    milestone_title: &str,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM user_learning_progress WHERE user_id = $1 AND milestone_title = $2")
        .bind(user_id)
        .bind(milestone_title)
        .execute(pool)
        .await?;

    Ok(())
}

/// Returns the set of milestone titles the user has completed.
pub async fn completed_milestones(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<HashSet<String>, AppError> {
    let rows: Vec<LearningProgressRow> = sqlx::query_as(
        "SELECT milestone_title, completed FROM user_learning_progress WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter(|r| r.completed)
        .map(|r| r.milestone_title)
        .collect())
}
