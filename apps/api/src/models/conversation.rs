use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who spoke a turn. Accepts the legacy `user` / `ai` wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    #[serde(alias = "user")]
    Candidate,
    #[serde(alias = "ai")]
    Interviewer,
}

impl Speaker {
    /// Label used when the transcript is quoted in a prompt.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Candidate => "Candidate",
            Speaker::Interviewer => "Interviewer",
        }
    }
}

/// One append-only entry in an interview transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(alias = "type")]
    pub role: Speaker,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn candidate(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Candidate,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn interviewer(content: impl Into<String>) -> Self {
        Self {
            role: Speaker::Interviewer,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// `Candidate: …` / `Interviewer: …`
    pub fn to_prompt_line(&self) -> String {
        format!("{}: {}", self.role.label(), self.content)
    }
}
