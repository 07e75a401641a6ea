//! Roadmap generation — a 30-day milestone plan from the LLM, enriched with
//! the user's completion state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::learning_path::prompts::ROADMAP_PROMPT_TEMPLATE;
use crate::llm_client::{GeminiClient, DEFAULT_MODEL};

/// One milestone of the learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    /// "Beginner", "Intermediate", or "Advanced".
    pub difficulty: String,
    /// Set from `user_learning_progress` after generation, never by the LLM.
    #[serde(default)]
    pub completed: bool,
}

/// Generates the roadmap via the LLM. A failed call or unparseable output
/// degrades to an empty roadmap rather than failing the whole learning path.
pub async fn generate_roadmap(
    llm: &GeminiClient,
    target_role: &str,
    missing_skills: &[String],
) -> Vec<Milestone> {
    let prompt = ROADMAP_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{missing_skills}", &missing_skills.join(", "));

    match llm.call_json::<Vec<Milestone>>(&prompt, DEFAULT_MODEL).await {
        Ok(roadmap) => roadmap,
        Err(e) => {
            warn!("Roadmap generation failed, returning empty roadmap: {e}");
            Vec::new()
        }
    }
}

/// Marks milestones whose titles the user has already completed.
pub fn mark_completed(roadmap: &mut [Milestone], completed_titles: &HashSet<String>) {
    for milestone in roadmap {
        milestone.completed = completed_titles.contains(&milestone.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(title: &str) -> Milestone {
        Milestone {
            title: title.to_string(),
            description: "desc".to_string(),
            difficulty: "Beginner".to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_mark_completed_matches_exact_titles() {
        let mut roadmap = vec![
            milestone("Week 1: Rust Fundamentals"),
            milestone("Week 2: Async Rust"),
        ];
        let completed: HashSet<String> =
            std::iter::once("Week 1: Rust Fundamentals".to_string()).collect();

        mark_completed(&mut roadmap, &completed);

        assert!(roadmap[0].completed);
        assert!(!roadmap[1].completed);
    }

    #[test]
    fn test_mark_completed_with_empty_progress() {
        let mut roadmap = vec![milestone("Week 1: Foundations")];
        mark_completed(&mut roadmap, &HashSet::new());
        assert!(!roadmap[0].completed);
    }

    #[test]
    fn test_milestone_deserializes_without_completed_flag() {
        let json = r#"{
            "title": "Week 1: Foundations of Kubernetes",
            "description": "Learn pods, deployments, and services.",
            "difficulty": "Beginner"
        }"#;
        let parsed: Milestone = serde_json::from_str(json).unwrap();
        assert!(!parsed.completed);
        assert_eq!(parsed.difficulty, "Beginner");
    }

    #[test]
    fn test_roadmap_prompt_embeds_skills() {
        let skills = vec!["Docker".to_string(), "Kubernetes".to_string()];
        let prompt = ROADMAP_PROMPT_TEMPLATE
            .replace("{target_role}", "DevOps Engineer")
            .replace("{missing_skills}", &skills.join(", "));
        assert!(prompt.contains("Docker, Kubernetes"));
        assert!(prompt.contains("DevOps Engineer"));
    }
}
