// LLM prompt constants for career assessment.

/// Assessment prompt template.
/// Replace `{target_role}` and `{resume_text}` before sending.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Analyze the match between this resume and the target role.
Target Role: {target_role}
Resume Text: {resume_text}

Generate a detailed assessment and return it as a valid JSON object with the following structure:
{
  "score": integer (0-100, the match percentage),
  "verdict": "A 2-sentence executive summary highlighting key strengths and the biggest gap.",
  "keywords": {
    "present": ["list", "of", "keywords", "from", "the", "role", "found", "in", "resume"],
    "missing": ["list", "of", "keywords", "from", "the", "role", "NOT", "found", "in", "resume"]
  },
  "skill_gaps": [
    { "skill": "Skill Name", "gap_score": integer (1-10, how weak they are), "impact": "High Impact" or "Medium Impact" or "Low Impact" }
  ],
  "pivot_careers": {
    "alternatives": [
      { "role": "Role Name", "match": integer (0-100) }
    ],
    "trending": [
      { "role": "Role Name", "description": "Why this is trending for them" }
    ]
  }
}

Return ONLY the JSON object, no markdown formatting."#;
