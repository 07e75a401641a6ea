//! Resume extraction — PDF text extraction plus LLM structuring.
//!
//! Text extraction delegates entirely to `pdf-extract`; the LLM turns the
//! raw text into the structured profile shape the frontend expects.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, EXTRACTION_MODEL};
use crate::resume::prompts::RESUME_EXTRACT_PROMPT_TEMPLATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Structured data extracted from a resume PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedResume {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Extracts text from the PDF bytes and asks the LLM for structured data.
pub async fn extract_resume(
    file_bytes: &[u8],
    llm: &GeminiClient,
) -> Result<ExtractedResume, AppError> {
    let text = pdf_extract::extract_text_from_mem(file_bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Failed to read PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text content found in PDF".to_string(),
        ));
    }

    let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", &text);
    let extracted = llm
        .call_json::<ExtractedResume>(&prompt, EXTRACTION_MODEL)
        .await?;

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_resume_full_deserializes() {
        let json = r#"{
            "skills": ["Rust", "PostgreSQL"],
            "education": [
                {"degree": "BS Computer Science", "institution": "Test Univ", "year": "2022"}
            ],
            "experience": [
                {
                    "role": "Backend Engineer",
                    "company": "Acme",
                    "duration": "2022-2024",
                    "description": "Built APIs"
                }
            ],
            "bio": "Backend engineer with two years of experience."
        }"#;
        let parsed: ExtractedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.experience[0].company.as_deref(), Some("Acme"));
        assert!(parsed.bio.is_some());
    }

    #[test]
    fn test_extracted_resume_tolerates_missing_sections() {
        // Sparse resumes produce sparse LLM output; every section is optional.
        let parsed: ExtractedResume = serde_json::from_str(r#"{"skills": ["Go"]}"#).unwrap();
        assert_eq!(parsed.skills, vec!["Go"]);
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.bio.is_none());
    }

    #[test]
    fn test_extract_prompt_embeds_resume_text() {
        let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", "RESUME BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
