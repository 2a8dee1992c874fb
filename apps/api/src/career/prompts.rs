// All LLM prompt constants for the Career module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Career suggestion prompt template.
/// Replace: {skills}, {resume}, {json_rule}
pub const CAREER_SUGGESTION_PROMPT_TEMPLATE: &str = r#"As a career advisor AI, analyze these skills and provide exactly 3 career recommendations in JSON format.

Skills: "{skills}"

Resume (may be empty):
{resume}

Each career object must have:
- title: Career title
- match: Match percentage as a string (e.g., "92%")
- description: Brief career description (max 100 chars)
- skillsUsed: Array of 3-4 relevant skills from the input
- roadmap: Array of 3-4 specific learning steps
- resources: Array of 2-3 concrete learning resources (courses, books, certifications)

Example format:
[
  {
    "title": "Software Engineer",
    "match": "92%",
    "description": "Build scalable applications using programming skills",
    "skillsUsed": ["JavaScript", "Problem Solving", "React"],
    "roadmap": ["Master advanced JavaScript", "Learn system design", "Practice algorithms"],
    "resources": ["The Pragmatic Programmer", "System Design Primer on GitHub"]
  }
]

Ensure realistic match percentages and practical roadmap steps.
{json_rule}"#;
