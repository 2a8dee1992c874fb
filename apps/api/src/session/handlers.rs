//! Session-scoped routes. Each handler snapshots what it needs, releases the
//! store, calls the generator, then writes the outcome back. Write-backs
//! re-check the state they were computed from and answer 409 when another
//! request got there first.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::career::handlers::{require_skills, CareerRequest};
use crate::career::suggestions::suggest_careers;
use crate::errors::AppError;
use crate::extract::handlers::read_upload;
use crate::extract::loader::{load_text, FileSource};
use crate::interview::chat::{chat_reply, welcome_message, ChatTurnInput};
use crate::interview::handlers::{require_message, require_role};
use crate::interview::voice::{answer_feedback, next_question, VoiceQuestion, MAX_QUESTIONS};
use crate::interview::InterviewReply;
use crate::models::conversation::ConversationTurn;
use crate::models::document::CandidateDocument;
use crate::models::session::{ChatSession, SessionState, Tab, VoicePhase, VoiceSession};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: Tab,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct VoiceAnswerRequest {
    #[serde(default, alias = "transcript")]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub reply: InterviewReply,
    pub session: SessionState,
}

#[derive(Debug, Serialize)]
pub struct VoiceTurnResponse {
    /// Absent when the interview has just started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<InterviewReply>,
    pub question: VoiceQuestion,
    pub session: SessionState,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionState>) {
    let session = state.sessions.create().await;
    info!("Session {} created", session.id);
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionState>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/tab
pub async fn handle_switch_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TabRequest>,
) -> Result<Json<SessionState>, AppError> {
    let session = state
        .sessions
        .update(id, |s| {
            s.active_tab = req.tab;
            Ok(s.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/resume
///
/// Replaces the session's résumé. Low-confidence and unreadable files are
/// stored with their canned text and status so the client can prompt a paste.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionState>, AppError> {
    // Fail fast before reading a large body for a session that does not exist.
    state.sessions.get(id).await?;

    let upload = read_upload(&mut multipart).await?;
    let loaded = load_text(&upload).await;
    let raw_bytes = upload.read().await.unwrap_or_default();
    let media_type = upload.media_type().map(str::to_string);
    let document = CandidateDocument::from_upload(media_type, raw_bytes, loaded);
    info!(
        "Session {id}: résumé '{}' stored ({} bytes, {:?})",
        document.file_name,
        document.raw_bytes.len(),
        document.status
    );

    let session = state
        .sessions
        .update(id, |s| {
            s.resume = Some(document);
            Ok(s.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/career
///
/// Uses the request's résumé text when given, otherwise the session's.
pub async fn handle_session_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CareerRequest>,
) -> Result<Json<SessionState>, AppError> {
    let skills = require_skills(&req.skills)?.to_string();
    let snapshot = state.sessions.get(id).await?;
    let resume = req
        .resume_text
        .as_deref()
        .or_else(|| snapshot.resume_text());

    let outcome = suggest_careers(state.llm.as_ref(), &skills, resume).await;

    let session = state
        .sessions
        .update(id, |s| {
            s.skills = Some(skills);
            s.suggestions_source = Some(outcome.source());
            s.suggestions = outcome.into_suggestions();
            Ok(s.clone())
        })
        .await?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/chat/start
///
/// Starts (or restarts) the chat interview with the role's greeting.
pub async fn handle_start_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RoleRequest>,
) -> Result<Json<ChatTurnResponse>, AppError> {
    let role = require_role(&req.role)?;
    let profile = state.roles.resolve(role);
    let reply = InterviewReply::scripted(welcome_message(&profile));

    let session = state
        .sessions
        .update(id, |s| {
            s.active_tab = Tab::Chat;
            s.chat = ChatSession {
                role: Some(role.to_string()),
                turns: vec![ConversationTurn::interviewer(reply.text.clone())],
            };
            Ok(s.clone())
        })
        .await?;
    Ok(Json(ChatTurnResponse { reply, session }))
}

/// POST /api/v1/sessions/:id/chat/messages
///
/// Appends the candidate's message and the interviewer's reply. The message
/// answering the greeting doubles as the résumé when none was uploaded.
pub async fn handle_send_chat_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ChatTurnResponse>, AppError> {
    let message = require_message(&req.message)?;
    let snapshot = state.sessions.get(id).await?;
    let role = snapshot
        .chat
        .role
        .clone()
        .ok_or_else(|| AppError::Conflict("chat interview has not been started".to_string()))?;
    let history_len = snapshot.chat.turns.len();
    let adopt_as_resume = history_len == 1 && snapshot.resume_text().is_none();

    let profile = state.roles.resolve(&role);
    let input = ChatTurnInput {
        message,
        history: &snapshot.chat.turns,
        is_first_message: false,
        resume: snapshot.resume_text(),
    };
    let reply = chat_reply(state.llm.as_ref(), &profile, &input).await;

    let session = state
        .sessions
        .update(id, |s| {
            if s.chat.role.as_deref() != Some(role.as_str()) || s.chat.turns.len() != history_len {
                return Err(AppError::Conflict(
                    "chat transcript changed while the reply was being generated".to_string(),
                ));
            }
            if adopt_as_resume && s.resume_text().is_none() {
                s.resume = Some(CandidateDocument::pasted(message));
            }
            s.chat.turns.push(ConversationTurn::candidate(message));
            s.chat.turns.push(ConversationTurn::interviewer(reply.text.clone()));
            Ok(s.clone())
        })
        .await?;
    Ok(Json(ChatTurnResponse { reply, session }))
}

/// POST /api/v1/sessions/:id/voice/start
///
/// Starts (or restarts) voice practice and issues the first question.
pub async fn handle_start_voice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RoleRequest>,
) -> Result<Json<VoiceTurnResponse>, AppError> {
    let role = require_role(&req.role)?;
    let snapshot = state.sessions.get(id).await?;
    let profile = state.roles.resolve(role);
    let question = next_question(state.llm.as_ref(), &profile, 0, snapshot.resume_text()).await;

    let session = state
        .sessions
        .update(id, |s| {
            s.active_tab = Tab::Voice;
            s.voice = VoiceSession {
                role: Some(role.to_string()),
                question_number: 0,
                phase: VoicePhase::AwaitingAnswer,
                current_question: Some(question.text.clone()),
                last_transcript: None,
                last_feedback: None,
            };
            Ok(s.clone())
        })
        .await?;
    Ok(Json(VoiceTurnResponse {
        feedback: None,
        question,
        session,
    }))
}

/// POST /api/v1/sessions/:id/voice/answer
///
/// Accepted only while a question is awaiting its answer. Returns feedback
/// and the next question, or the closing message after the last one.
pub async fn handle_voice_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<VoiceAnswerRequest>,
) -> Result<Json<VoiceTurnResponse>, AppError> {
    let answer = require_message(&req.answer)?;
    let snapshot = state.sessions.get(id).await?;
    let voice = &snapshot.voice;
    let role = match (&voice.role, voice.phase) {
        (Some(role), VoicePhase::AwaitingAnswer) => role.clone(),
        _ => {
            return Err(AppError::Conflict(
                "no voice question is awaiting an answer".to_string(),
            ))
        }
    };
    let answered = voice.question_number;

    let profile = state.roles.resolve(&role);
    let feedback = answer_feedback(state.llm.as_ref(), &profile, answer).await;
    let next_number = answered + 1;
    let question = next_question(
        state.llm.as_ref(),
        &profile,
        next_number,
        snapshot.resume_text(),
    )
    .await;

    let session = state
        .sessions
        .update(id, |s| {
            let v = &mut s.voice;
            if v.phase != VoicePhase::AwaitingAnswer || v.question_number != answered {
                return Err(AppError::Conflict(
                    "voice interview moved on while the answer was being processed".to_string(),
                ));
            }
            v.last_transcript = Some(answer.to_string());
            v.last_feedback = Some(feedback.text.clone());
            v.question_number = next_number;
            if next_number >= MAX_QUESTIONS {
                v.phase = VoicePhase::Complete;
                v.current_question = None;
            } else {
                v.current_question = Some(question.text.clone());
            }
            Ok(s.clone())
        })
        .await?;
    Ok(Json(VoiceTurnResponse {
        feedback: Some(feedback),
        question,
        session,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::interview::chat::RESUME_SUBMISSION_FALLBACK;
    use crate::interview::voice::{CLOSING_MESSAGE, FEEDBACK_FALLBACK};
    use crate::llm_client::fake::ScriptedLlm;
    use crate::llm_client::ReplySource;
    use crate::models::conversation::Speaker;

    async fn state_with(llm: ScriptedLlm) -> (AppState, Uuid) {
        let state = AppState::for_tests(Arc::new(llm));
        let id = state.sessions.create().await.id;
        (state, id)
    }

    fn role(role: &str) -> Json<RoleRequest> {
        Json(RoleRequest {
            role: role.to_string(),
        })
    }

    fn answer(text: &str) -> Json<VoiceAnswerRequest> {
        Json(VoiceAnswerRequest {
            answer: text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_chat_message_before_start_is_conflict() {
        let (state, id) = state_with(ScriptedLlm::new()).await;
        let result = handle_send_chat_message(
            State(state),
            Path(id),
            Json(ChatMessageRequest {
                message: "hello".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_chat_turns_append_in_order_and_resume_is_adopted() {
        let llm = ScriptedLlm::new()
            .with_reply("Thanks. Which project mattered most?")
            .with_failure(500);
        let (state, id) = state_with(llm).await;

        let Json(started) = handle_start_chat(State(state.clone()), Path(id), role("product-manager"))
            .await
            .unwrap();
        assert_eq!(started.reply.source, ReplySource::Scripted);
        assert_eq!(started.session.active_tab, Tab::Chat);

        let send = |text: &str| ChatMessageRequest {
            message: text.to_string(),
        };
        let Json(first) = handle_send_chat_message(
            State(state.clone()),
            Path(id),
            Json(send("PM at Initech, launched two B2B products")),
        )
        .await
        .unwrap();
        assert_eq!(first.reply.source, ReplySource::Generated);
        assert_eq!(
            first.session.resume_text(),
            Some("PM at Initech, launched two B2B products")
        );

        let Json(second) =
            handle_send_chat_message(State(state.clone()), Path(id), Json(send("The billing revamp")))
                .await
                .unwrap();
        assert_eq!(second.reply.source, ReplySource::Fallback);

        let turns = &second.session.chat.turns;
        let roles: Vec<_> = turns.iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                Speaker::Interviewer,
                Speaker::Candidate,
                Speaker::Interviewer,
                Speaker::Candidate,
                Speaker::Interviewer,
            ]
        );
        assert_eq!(turns[3].content, "The billing revamp");
        assert_ne!(turns[4].content, RESUME_SUBMISSION_FALLBACK);
    }

    #[tokio::test]
    async fn test_uploaded_resume_is_not_replaced_by_chat_message() {
        let (state, id) = state_with(ScriptedLlm::new()).await;
        state
            .sessions
            .update(id, |s| {
                s.resume = Some(CandidateDocument::pasted("Uploaded CV"));
                Ok(())
            })
            .await
            .unwrap();
        handle_start_chat(State(state.clone()), Path(id), role("ux-designer"))
            .await
            .unwrap();
        let Json(turn) = handle_send_chat_message(
            State(state),
            Path(id),
            Json(ChatMessageRequest {
                message: "here are my links".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(turn.session.resume_text(), Some("Uploaded CV"));
    }

    #[tokio::test]
    async fn test_voice_answer_without_pending_question_is_conflict() {
        let (state, id) = state_with(ScriptedLlm::new()).await;
        let result = handle_voice_answer(State(state), Path(id), answer("hi")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_voice_runs_five_questions_then_completes() {
        // Empty script: every call falls back, so no canned replies are needed.
        let (state, id) = state_with(ScriptedLlm::new()).await;

        let Json(start) = handle_start_voice(State(state.clone()), Path(id), role("data-scientist"))
            .await
            .unwrap();
        assert!(start.feedback.is_none());
        assert_eq!(start.session.voice.phase, VoicePhase::AwaitingAnswer);

        let mut last = start;
        for n in 1..=MAX_QUESTIONS {
            let Json(turn) = handle_voice_answer(State(state.clone()), Path(id), answer("An answer"))
                .await
                .unwrap();
            assert_eq!(turn.feedback.as_ref().unwrap().text, FEEDBACK_FALLBACK);
            assert_eq!(turn.session.voice.question_number, n);
            last = turn;
        }

        assert_eq!(last.question.text, CLOSING_MESSAGE);
        assert!(!last.question.has_more_questions);
        assert_eq!(last.session.voice.phase, VoicePhase::Complete);
        assert!(last.session.voice.current_question.is_none());

        let after = handle_voice_answer(State(state), Path(id), answer("one more")).await;
        assert!(matches!(after, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_session_career_uses_stored_resume_and_records_source() {
        let llm = Arc::new(ScriptedLlm::new().with_failure(503));
        let state = AppState::for_tests(llm.clone());
        let id = state.sessions.create().await.id;
        state
            .sessions
            .update(id, |s| {
                s.resume = Some(CandidateDocument::pasted("Statistician, R and SAS"));
                Ok(())
            })
            .await
            .unwrap();

        let Json(session) = handle_session_career(
            State(state),
            Path(id),
            Json(CareerRequest {
                skills: "statistics".to_string(),
                resume_text: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(session.skills.as_deref(), Some("statistics"));
        assert_eq!(session.suggestions.len(), 3);
        assert_eq!(session.suggestions_source, Some(ReplySource::Fallback));
        assert!(llm.prompts()[0].contains("Statistician, R and SAS"));
    }

    #[tokio::test]
    async fn test_switch_tab_and_delete() {
        let (state, id) = state_with(ScriptedLlm::new()).await;
        let Json(session) = handle_switch_tab(
            State(state.clone()),
            Path(id),
            Json(TabRequest { tab: Tab::Voice }),
        )
        .await
        .unwrap();
        assert_eq!(session.active_tab, Tab::Voice);

        assert_eq!(
            handle_delete_session(State(state.clone()), Path(id)).await.unwrap(),
            StatusCode::NO_CONTENT
        );
        assert!(matches!(
            handle_get_session(State(state), Path(id)).await,
            Err(AppError::NotFound(_))
        ));
    }
}
