//! Profile sync — upserts the profile row and fully resyncs the user's
//! skill set (skills table plus user_skills junction).

use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

/// Proficiency assigned when the client does not provide one.
const DEFAULT_PROFICIENCY: i32 = 3;

#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default = "empty_list")]
    pub education: Value,
    #[serde(default = "empty_list")]
    pub experience: Value,
    #[serde(default = "empty_list")]
    pub projects: Value,
    #[serde(default = "empty_list")]
    pub achievements: Value,
    #[serde(default = "empty_list")]
    pub certifications: Value,
    #[serde(default = "empty_list")]
    pub goals: Value,
    pub resume_text: Option<String>,
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

// A request without a `profile` key clears the row to empty lists, not nulls,
// matching what the serde defaults produce for a present-but-sparse payload.
impl Default for ProfilePayload {
    fn default() -> Self {
        Self {
            full_name: None,
            bio: None,
            country: None,
            email: None,
            linkedin_url: None,
            education: empty_list(),
            experience: empty_list(),
            projects: empty_list(),
            achievements: empty_list(),
            certifications: empty_list(),
            goals: empty_list(),
            resume_text: None,
        }
    }
}

/// Upserts the `profiles` row for `user_id`.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: &ProfilePayload,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO profiles
            (user_id, full_name, bio, country, email, linkedin_url,
             education, experience, projects, achievements, certifications,
             goals, resume_text, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, now())
        ON CONFLICT (user_id) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            bio = EXCLUDED.bio,
            country = EXCLUDED.country,
            email = EXCLUDED.email,
            linkedin_url = EXCLUDED.linkedin_url,
            education = EXCLUDED.education,
            experience = EXCLUDED.experience,
            projects = EXCLUDED.projects,
            achievements = EXCLUDED.achievements,
            certifications = EXCLUDED.certifications,
            goals = EXCLUDED.goals,
            resume_text = EXCLUDED.resume_text,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(&profile.full_name)
    .bind(&profile.bio)
    .bind(&profile.country)
    .bind(&profile.email)
    .bind(&profile.linkedin_url)
    .bind(&profile.education)
    .bind(&profile.experience)
    .bind(&profile.projects)
    .bind(&profile.achievements)
    .bind(&profile.certifications)
    .bind(&profile.goals)
    .bind(&profile.resume_text)
    .execute(pool)
    .await?;

    Ok(())
}

/// Ensures each skill name exists in `skills` and returns the ids in request
/// order. Names are trimmed; empty names are skipped; duplicate names map to
/// the same id once.
pub async fn ensure_skills(pool: &PgPool, skill_names: &[String]) -> Result<Vec<i64>, AppError> {
    let mut skill_ids: Vec<i64> = Vec::new();

    for raw in skill_names {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM skills WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await?;

        let id = match existing {
            Some(id) => id,
            None => {
                sqlx::query_scalar("INSERT INTO skills (name) VALUES ($1) RETURNING id")
                    .bind(name)
                    .fetch_one(pool)
                    .await?
            }
        };

        if !skill_ids.contains(&id) {
            skill_ids.push(id);
        }
    }

    Ok(skill_ids)
}

/// Full resync of the `user_skills` junction: delete everything for the user,
/// re-insert one row per skill id with the default proficiency.
pub async fn resync_user_skills(
    pool: &PgPool,
    user_id: Uuid,
    skill_ids: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM user_skills WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    for skill_id in skill_ids {
        sqlx::query("INSERT INTO user_skills (user_id, skill_id, proficiency) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(skill_id)
            .bind(DEFAULT_PROFICIENCY)
            .execute(pool)
            .await?;
    }

    debug!("Resynced {} skills for user {user_id}", skill_ids.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_payload_defaults_to_empty_lists() {
        let payload: ProfilePayload = serde_json::from_str(r#"{"full_name": "Test User"}"#).unwrap();
        assert_eq!(payload.full_name.as_deref(), Some("Test User"));
        assert_eq!(payload.education, empty_list());
        assert_eq!(payload.goals, empty_list());
        assert!(payload.resume_text.is_none());
    }

    #[test]
    fn test_profile_payload_default_uses_empty_lists_not_null() {
        let payload = ProfilePayload::default();
        assert_eq!(payload.education, empty_list());
        assert_eq!(payload.certifications, empty_list());
    }

    #[test]
    fn test_profile_payload_accepts_structured_lists() {
        let payload: ProfilePayload = serde_json::from_str(
            r#"{
                "bio": "A test bio",
                "education": [{"degree": "BS CS", "institution": "Test Univ", "year": "2024"}]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.education.as_array().unwrap().len(), 1);
    }
}
