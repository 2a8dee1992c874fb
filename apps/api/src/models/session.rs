use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::career::suggestions::CareerSuggestion;
use crate::llm_client::ReplySource;
use crate::models::conversation::ConversationTurn;
use crate::models::document::CandidateDocument;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Career,
    Chat,
    Voice,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSession {
    pub role: Option<String>,
    pub turns: Vec<ConversationTurn>,
}

/// Voice practice runs speak → listen → process, one step at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoicePhase {
    #[default]
    Idle,
    /// A question has been issued and no answer processed yet.
    AwaitingAnswer,
    Complete,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceSession {
    pub role: Option<String>,
    /// Zero-based index of the current question.
    pub question_number: u32,
    pub phase: VoicePhase,
    pub current_question: Option<String>,
    pub last_transcript: Option<String>,
    pub last_feedback: Option<String>,
}

/// Everything one user's browser session needs, owned by the session store
/// and serialized back to the client on every change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub id: Uuid,
    pub active_tab: Tab,
    pub resume: Option<CandidateDocument>,
    pub skills: Option<String>,
    pub suggestions: Vec<CareerSuggestion>,
    pub suggestions_source: Option<ReplySource>,
    pub chat: ChatSession,
    pub voice: VoiceSession,
    pub created_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            active_tab: Tab::default(),
            resume: None,
            skills: None,
            suggestions: Vec::new(),
            suggestions_source: None,
            chat: ChatSession::default(),
            voice: VoiceSession::default(),
            created_at: Utc::now(),
        }
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume.as_ref().and_then(CandidateDocument::usable_text)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
