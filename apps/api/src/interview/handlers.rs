use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::chat::{chat_reply, ChatTurnInput};
use crate::interview::voice::{answer_feedback, next_question};
use crate::llm_client::ReplySource;
use crate::models::conversation::ConversationTurn;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatInterviewRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "conversationHistory")]
    pub conversation_history: Vec<ConversationTurn>,
    #[serde(default, alias = "isFirstMessage")]
    pub is_first_message: bool,
    #[serde(default, alias = "resumeContent")]
    pub resume_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatInterviewResponse {
    pub response: String,
    pub source: ReplySource,
}

#[derive(Debug, Deserialize)]
pub struct VoiceInterviewRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "questionNumber")]
    pub question_number: u32,
    #[serde(default, alias = "userAnswer")]
    pub user_answer: Option<String>,
    #[serde(default, alias = "resumeContent")]
    pub resume_content: Option<String>,
}

/// A question when no answer was supplied, feedback otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VoiceInterviewResponse {
    Question {
        question: String,
        has_more_questions: bool,
        source: ReplySource,
    },
    Feedback {
        feedback: String,
        source: ReplySource,
    },
}

pub fn require_role(role: &str) -> Result<&str, AppError> {
    let role = role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role is required".to_string()));
    }
    Ok(role)
}

pub fn require_message(message: &str) -> Result<&str, AppError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }
    Ok(message)
}

/// POST /api/v1/chat-interview
///
/// Stateless: the client sends the transcript so far with every turn.
pub async fn handle_chat_interview(
    State(state): State<AppState>,
    Json(req): Json<ChatInterviewRequest>,
) -> Result<Json<ChatInterviewResponse>, AppError> {
    let role = require_role(&req.role)?;
    let message = if req.is_first_message {
        req.message.trim()
    } else {
        require_message(&req.message)?
    };

    let profile = state.roles.resolve(role);
    let input = ChatTurnInput {
        message,
        history: &req.conversation_history,
        is_first_message: req.is_first_message,
        resume: req.resume_content.as_deref(),
    };
    let reply = chat_reply(state.llm.as_ref(), &profile, &input).await;

    Ok(Json(ChatInterviewResponse {
        response: reply.text,
        source: reply.source,
    }))
}

/// POST /api/v1/voice-interview
pub async fn handle_voice_interview(
    State(state): State<AppState>,
    Json(req): Json<VoiceInterviewRequest>,
) -> Result<Json<VoiceInterviewResponse>, AppError> {
    let role = require_role(&req.role)?;
    let profile = state.roles.resolve(role);

    let response = match req.user_answer.as_deref() {
        None => {
            let q = next_question(
                state.llm.as_ref(),
                &profile,
                req.question_number,
                req.resume_content.as_deref(),
            )
            .await;
            VoiceInterviewResponse::Question {
                question: q.text,
                has_more_questions: q.has_more_questions,
                source: q.source,
            }
        }
        Some(answer) => {
            let reply = answer_feedback(state.llm.as_ref(), &profile, answer).await;
            VoiceInterviewResponse::Feedback {
                feedback: reply.text,
                source: reply.source,
            }
        }
    };
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_accepts_client_field_names() {
        let req: ChatInterviewRequest = serde_json::from_str(
            r#"{
                "message": "I build APIs",
                "role": "software-engineer",
                "conversationHistory": [{"type": "ai", "content": "Welcome."}],
                "isFirstMessage": false,
                "resumeContent": "Rust"
            }"#,
        )
        .unwrap();
        assert_eq!(req.conversation_history.len(), 1);
        assert!(!req.is_first_message);
        assert_eq!(req.resume_content.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_voice_response_shapes() {
        let question = serde_json::to_value(VoiceInterviewResponse::Question {
            question: "Why design?".to_string(),
            has_more_questions: true,
            source: ReplySource::Generated,
        })
        .unwrap();
        assert_eq!(
            question,
            serde_json::json!({"question": "Why design?", "has_more_questions": true, "source": "generated"})
        );

        let feedback = serde_json::to_value(VoiceInterviewResponse::Feedback {
            feedback: "Nice.".to_string(),
            source: ReplySource::Fallback,
        })
        .unwrap();
        assert_eq!(feedback, serde_json::json!({"feedback": "Nice.", "source": "fallback"}));
    }

    #[test]
    fn test_blank_role_and_message_rejected() {
        assert!(matches!(require_role("  "), Err(AppError::Validation(_))));
        assert!(matches!(require_message(""), Err(AppError::Validation(_))));
        assert_eq!(require_role(" ux-designer ").unwrap(), "ux-designer");
    }
}
