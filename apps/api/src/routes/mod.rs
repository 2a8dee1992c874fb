pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::career::handlers::handle_career_suggestions;
use crate::extract::handlers::handle_extract;
use crate::interview::handlers::{handle_chat_interview, handle_voice_interview};
use crate::roles::handle_list_roles;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless API
        .route("/api/v1/roles", get(handle_list_roles))
        .route("/api/v1/extract", post(handle_extract))
        .route("/api/v1/career-suggestions", post(handle_career_suggestions))
        .route("/api/v1/chat-interview", post(handle_chat_interview))
        .route("/api/v1/voice-interview", post(handle_voice_interview))
        // Session API
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/tab", put(sessions::handle_switch_tab))
        .route(
            "/api/v1/sessions/:id/resume",
            post(sessions::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/career",
            post(sessions::handle_session_career),
        )
        .route(
            "/api/v1/sessions/:id/chat/start",
            post(sessions::handle_start_chat),
        )
        .route(
            "/api/v1/sessions/:id/chat/messages",
            post(sessions::handle_send_chat_message),
        )
        .route(
            "/api/v1/sessions/:id/voice/start",
            post(sessions::handle_start_voice),
        )
        .route(
            "/api/v1/sessions/:id/voice/answer",
            post(sessions::handle_voice_answer),
        )
        .with_state(state)
}
