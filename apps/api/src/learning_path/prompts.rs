// LLM prompt constants for learning-path generation.

/// Roadmap prompt template.
/// Replace `{target_role}` and `{missing_skills}` before sending.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a highly personalized 30-day learning roadmap for someone aiming to become a {target_role}.
Missing Skills: {missing_skills}

Requirements:
1. The roadmap must be progressive (e.g., fundamentals BEFORE advanced tools).
2. Divide it into exactly 4 weekly milestones (or 3-5 major milestones).
3. Return ONLY a JSON array of objects with the following structure:
   [
     {
       "title": "Week 1: Foundations of X",
       "description": "Short description of what to learn and why.",
       "difficulty": "Beginner" | "Intermediate" | "Advanced"
     }
   ]

Ensure the path bridges the gap between their current missing skills and the target role effectively.
Return ONLY the JSON array, no markdown."#;

/// Capstone prompt template. Replace `{missing_skills}` before sending.
pub const CAPSTONE_PROMPT_TEMPLATE: &str = r#"Suggest a single, complex capstone project idea that helps a student practice these missing skills: {missing_skills}.
The project should be a meaningful portfolio piece.

Return ONLY a JSON object with this structure:
{
  "title": "Project Title",
  "description": "Detailed description of the project.",
  "technologies": ["list", "of", "technologies"],
  "learning_outcomes": ["point 1", "point 2"]
}

Return ONLY the JSON object, no markdown."#;
