//! Capstone generation — one portfolio project combining the missing skills.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::learning_path::prompts::CAPSTONE_PROMPT_TEMPLATE;
use crate::llm_client::{GeminiClient, DEFAULT_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapstoneProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

/// Generates a capstone project suggestion. Failure degrades to `None`; the
/// learning path is still useful without a capstone.
pub async fn generate_capstone(
    llm: &GeminiClient,
    missing_skills: &[String],
) -> Option<CapstoneProject> {
    let prompt = CAPSTONE_PROMPT_TEMPLATE.replace("{missing_skills}", &missing_skills.join(", "));

    match llm.call_json::<CapstoneProject>(&prompt, DEFAULT_MODEL).await {
        Ok(capstone) => Some(capstone),
        Err(e) => {
            warn!("Capstone generation failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capstone_deserializes() {
        let json = r#"{
            "title": "Observability Pipeline",
            "description": "Build a metrics pipeline with alerting.",
            "technologies": ["Kubernetes", "Prometheus"],
            "learning_outcomes": ["Deploy to a cluster", "Write alert rules"]
        }"#;
        let parsed: CapstoneProject = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.technologies.len(), 2);
        assert_eq!(parsed.learning_outcomes[0], "Deploy to a cluster");
    }

    #[test]
    fn test_capstone_tolerates_missing_lists() {
        let parsed: CapstoneProject =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert!(parsed.technologies.is_empty());
        assert!(parsed.learning_outcomes.is_empty());
    }
}
