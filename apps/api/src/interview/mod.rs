// Chat and voice interview practice. Both modes take a `RoleProfile` from the
// catalog and talk to the model only through llm_client::TextGenerator.

use serde::Serialize;

use crate::llm_client::ReplySource;

pub mod chat;
pub mod handlers;
pub mod prompts;
pub mod voice;

/// One interviewer utterance and where its text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewReply {
    pub text: String,
    pub source: ReplySource,
}

impl InterviewReply {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Generated,
        }
    }

    pub fn scripted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Scripted,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Fallback,
        }
    }
}
