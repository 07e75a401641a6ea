// LLM prompt constants for resume extraction.

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"You are an AI assistant that extracts structured data from resumes.
Extract the following information from the text below and return it as a valid JSON object:
- skills: list of strings (e.g., ["Python", "React", "Project Management"])
- education: list of objects with fields "degree", "institution", "year"
- experience: list of objects with fields "role", "company", "duration", "description"
- bio: a short professional summary (string)

Resume Text:
{resume_text}

Return ONLY the JSON object, no markdown formatting."#;
