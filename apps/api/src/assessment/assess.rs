//! Career assessment — scores a resume against a target role via the LLM
//! and records the result in `user_assessments`.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::assessment::prompts::ASSESSMENT_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, DEFAULT_MODEL};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordBreakdown {
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    /// 1-10: how weak the candidate is in this skill.
    pub gap_score: i32,
    /// "High Impact", "Medium Impact", or "Low Impact".
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeRole {
    pub role: String,
    /// 0-100 match percentage against the candidate's resume.
    #[serde(rename = "match")]
    pub match_score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingRole {
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PivotCareers {
    #[serde(default)]
    pub alternatives: Vec<AlternativeRole>,
    #[serde(default)]
    pub trending: Vec<TrendingRole>,
}

/// Full structured output of a career assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// 0-100 match percentage between resume and target role.
    pub score: i32,
    pub verdict: String,
    #[serde(default)]
    pub keywords: KeywordBreakdown,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGap>,
    #[serde(default)]
    pub pivot_careers: PivotCareers,
}

/// Runs the assessment prompt through the LLM and inserts a new
/// `user_assessments` row. Assessments are inserted, never upserted, so the
/// history is kept; readers take the newest row per user.
pub async fn run_assessment(
    pool: &PgPool,
    llm: &GeminiClient,
    user_id: Uuid,
    target_role: &str,
    resume_text: &str,
) -> Result<Assessment, AppError> {
    let prompt = ASSESSMENT_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{resume_text}", resume_text);

    let assessment: Assessment = llm.call_json(&prompt, DEFAULT_MODEL).await?;

    let feedback = serde_json::to_value(&assessment).map_err(anyhow::Error::from)?;

    sqlx::query(
        r#"
        INSERT INTO user_assessments
            (user_id, target_role, resume_text, score, feedback, created_at)
        VALUES ($1, $2, $3, $4, $5, now())
        "#,
    )
    .bind(user_id)
    .bind(target_role)
    .bind(resume_text)
    .bind(assessment.score)
    .bind(&feedback)
    .execute(pool)
    .await?;

    info!(
        "Stored assessment for user {user_id}: score {} against '{target_role}'",
        assessment.score
    );

    Ok(assessment)
}
