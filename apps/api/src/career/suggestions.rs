//! Career suggestions. Asks the model for three careers and decodes the first
//! JSON array found in its reply. Any failure yields the static fallback list,
//! tagged so callers can tell real data from canned data.

use std::sync::OnceLock;

use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::career::prompts::CAREER_SUGGESTION_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, resume_block, JSON_ARRAY_ONLY};
use crate::llm_client::{ReplySource, TextGenerator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub title: String,
    /// Match percentage as display text, e.g. "92%".
    #[serde(rename = "match", deserialize_with = "match_as_text")]
    pub match_score: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_used: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Models sometimes answer `"match": 92` instead of `"match": "92%"`.
fn match_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(format!("{n}%")),
        other => Err(de::Error::custom(format!(
            "expected match percentage, got {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Parsed(Vec<CareerSuggestion>),
    Fallback(Vec<CareerSuggestion>),
}

impl SuggestionOutcome {
    pub fn source(&self) -> ReplySource {
        match self {
            SuggestionOutcome::Parsed(_) => ReplySource::Generated,
            SuggestionOutcome::Fallback(_) => ReplySource::Fallback,
        }
    }

    pub fn into_suggestions(self) -> Vec<CareerSuggestion> {
        match self {
            SuggestionOutcome::Parsed(s) | SuggestionOutcome::Fallback(s) => s,
        }
    }
}

fn first_array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"))
}

/// Decodes the span from the first `[` to the last `]` in `text`.
/// `None` when there is no such span, it is not valid JSON, or it is empty.
pub fn decode_suggestions(text: &str) -> Option<Vec<CareerSuggestion>> {
    let span = first_array_pattern().find(text)?;
    match serde_json::from_str::<Vec<CareerSuggestion>>(span.as_str()) {
        Ok(suggestions) if !suggestions.is_empty() => Some(suggestions),
        Ok(_) => None,
        Err(e) => {
            warn!("Career suggestion array did not decode: {e}");
            None
        }
    }
}

pub fn build_prompt(skills: &str, resume_text: Option<&str>) -> String {
    let resume = resume_block(resume_text, "None provided");
    fill_template(
        CAREER_SUGGESTION_PROMPT_TEMPLATE,
        &[
            ("skills", skills.trim()),
            ("resume", resume.as_str()),
            ("json_rule", JSON_ARRAY_ONLY),
        ],
    )
}

/// Runs the suggestion prompt and decodes the reply, falling back to the
/// static list on any API or decoding failure.
pub async fn suggest_careers(
    llm: &dyn TextGenerator,
    skills: &str,
    resume_text: Option<&str>,
) -> SuggestionOutcome {
    let prompt = build_prompt(skills, resume_text);

    let reply = match llm.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Career suggestion call failed, using fallback: {e}");
            return SuggestionOutcome::Fallback(fallback_suggestions());
        }
    };

    match decode_suggestions(&reply) {
        Some(suggestions) => {
            info!("Decoded {} career suggestions", suggestions.len());
            SuggestionOutcome::Parsed(suggestions)
        }
        None => {
            warn!("No usable JSON array in career suggestion reply, using fallback");
            SuggestionOutcome::Fallback(fallback_suggestions())
        }
    }
}

fn suggestion(
    title: &str,
    match_score: &str,
    description: &str,
    skills_used: &[&str],
    roadmap: &[&str],
    resources: &[&str],
) -> CareerSuggestion {
    CareerSuggestion {
        title: title.to_string(),
        match_score: match_score.to_string(),
        description: description.to_string(),
        skills_used: owned(skills_used),
        roadmap: owned(roadmap),
        resources: owned(resources),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Static list shown when the model is unavailable or its reply is unusable.
pub fn fallback_suggestions() -> Vec<CareerSuggestion> {
    vec![
        suggestion(
            "Software Engineer",
            "92%",
            "Build scalable applications using your programming skills",
            &["Programming", "Problem Solving", "Technical Analysis"],
            &[
                "Master full-stack development",
                "Learn system design",
                "Practice algorithms",
                "Build portfolio projects",
            ],
            &["The Pragmatic Programmer", "System Design Primer"],
        ),
        suggestion(
            "Data Scientist",
            "88%",
            "Analyze data to drive business insights and decisions",
            &["Data Analysis", "Python", "Statistics"],
            &[
                "Master Python/R",
                "Learn machine learning",
                "Practice SQL",
                "Build data projects",
            ],
            &["Kaggle Learn", "An Introduction to Statistical Learning"],
        ),
        suggestion(
            "Product Manager",
            "85%",
            "Lead product strategy and coordinate development teams",
            &["Communication", "Analysis", "Strategy"],
            &[
                "Learn product frameworks",
                "Develop user research skills",
                "Master analytics tools",
                "Practice stakeholder management",
            ],
            &["Inspired by Marty Cagan", "Google Analytics certification"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::ScriptedLlm;

    const TWO_CAREERS: &str = r#"[
        {"title": "Backend Engineer", "match": "91%", "description": "Build APIs",
         "skillsUsed": ["Rust", "SQL"], "roadmap": ["Learn tokio", "Ship a service"],
         "resources": ["Zero To Production in Rust"]},
        {"title": "SRE", "match": 80, "description": "Keep systems up",
         "skillsUsed": ["Linux"], "roadmap": ["Learn Kubernetes"]}
    ]"#;

    #[test]
    fn test_decode_array_embedded_in_prose() {
        let text = format!("Here are your careers:\n```json\n{TWO_CAREERS}\n```\nGood luck!");
        let decoded = decode_suggestions(&text).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].title, "Backend Engineer");
        assert_eq!(decoded[0].skills_used, vec!["Rust", "SQL"]);
        assert_eq!(decoded[0].resources, vec!["Zero To Production in Rust"]);
    }

    #[test]
    fn test_numeric_match_becomes_percentage_text() {
        let decoded = decode_suggestions(TWO_CAREERS).unwrap();
        assert_eq!(decoded[1].match_score, "80%");
        assert!(decoded[1].resources.is_empty());
    }

    #[test]
    fn test_decode_rejects_prose_without_array() {
        assert!(decode_suggestions("I think you'd make a great engineer.").is_none());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(decode_suggestions("[{title: Engineer, match: high}]").is_none());
    }

    #[test]
    fn test_decode_rejects_empty_array() {
        assert!(decode_suggestions("Nothing fits: []").is_none());
    }

    #[test]
    fn test_serialized_field_names_match_client_contract() {
        let value = serde_json::to_value(&fallback_suggestions()[0]).unwrap();
        assert_eq!(value["match"], "92%");
        assert!(value.get("skillsUsed").is_some());
        assert!(value.get("roadmap").is_some());
        assert!(value.get("resources").is_some());
    }

    #[test]
    fn test_prompt_quotes_skills_and_resume() {
        let prompt = build_prompt("  Rust, SQL  ", Some("Six years backend"));
        assert!(prompt.contains("Skills: \"Rust, SQL\""));
        assert!(prompt.contains("Six years backend"));
        assert!(prompt.contains("exactly 3 career recommendations"));
        assert!(!prompt.contains("{json_rule}"));
    }

    #[test]
    fn test_placeholders_typed_by_the_user_are_kept_verbatim() {
        let prompt = build_prompt("Rust {json_rule}", Some("CV mentions {skills}"));
        assert!(prompt.contains("Skills: \"Rust {json_rule}\""));
        assert!(prompt.contains("CV mentions {skills}"));
        assert_eq!(prompt.matches(JSON_ARRAY_ONLY).count(), 1);
    }

    #[test]
    fn test_prompt_without_resume_uses_placeholder() {
        assert!(build_prompt("Python", None).contains("None provided"));
    }

    #[tokio::test]
    async fn test_suggest_careers_parsed_outcome() {
        let llm = ScriptedLlm::new().with_reply(TWO_CAREERS);
        let outcome = suggest_careers(&llm, "Rust", None).await;
        assert!(matches!(outcome, SuggestionOutcome::Parsed(_)));
        assert_eq!(outcome.source(), ReplySource::Generated);
        assert_eq!(outcome.into_suggestions().len(), 2);
        assert_eq!(llm.calls(), 1);
    }

    #[tokio::test]
    async fn test_suggest_careers_api_failure_falls_back() {
        let llm = ScriptedLlm::new().with_failure(503);
        let outcome = suggest_careers(&llm, "Rust", None).await;
        assert_eq!(outcome.source(), ReplySource::Fallback);
        assert_eq!(outcome.into_suggestions(), fallback_suggestions());
    }

    #[tokio::test]
    async fn test_suggest_careers_unparseable_reply_falls_back() {
        let llm = ScriptedLlm::new().with_reply("Sorry, I can't help with that.");
        let outcome = suggest_careers(&llm, "Rust", None).await;
        assert!(matches!(outcome, SuggestionOutcome::Fallback(ref s) if s.len() == 3));
    }
}
