use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// The columns read back from `user_assessments` when building a learning
/// path. The table itself lives in the managed database; assessments are
/// written by the career-assessment endpoint and only ever read newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub target_role: Option<String>,
    /// Full assessment JSON as returned by the LLM, including
    /// `keywords.missing`, the input to roadmap generation.
    pub feedback: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRow {
    /// Extracts `feedback.keywords.missing` as a list of skill names.
    /// Missing or malformed fields degrade to an empty list.
    pub fn missing_skills(&self) -> Vec<String> {
        self.feedback
            .as_ref()
            .and_then(|f| f.get("keywords"))
            .and_then(|k| k.get("missing"))
            .and_then(|m| m.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(feedback: Option<Value>) -> AssessmentRow {
        AssessmentRow {
            target_role: Some("Backend Engineer".to_string()),
            feedback,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_skills_extracts_list() {
        let row = row(Some(json!({
            "score": 62,
            "keywords": {"present": ["Python"], "missing": ["Rust", "Kubernetes"]}
        })));
        assert_eq!(row.missing_skills(), vec!["Rust", "Kubernetes"]);
    }

    #[test]
    fn test_missing_skills_tolerates_absent_feedback() {
        assert!(row(None).missing_skills().is_empty());
    }

    #[test]
    fn test_missing_skills_tolerates_malformed_keywords() {
        let row = row(Some(json!({"keywords": "not-an-object"})));
        assert!(row.missing_skills().is_empty());
    }

    #[test]
    fn test_missing_skills_skips_non_string_entries() {
        let row = row(Some(json!({"keywords": {"missing": ["Rust", 7, null]}})));
        assert_eq!(row.missing_skills(), vec!["Rust"]);
    }
}
