use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::career::suggestions::{suggest_careers, CareerSuggestion};
use crate::errors::AppError;
use crate::llm_client::ReplySource;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default, alias = "resumeText", alias = "resumeContent")]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub suggestions: Vec<CareerSuggestion>,
    pub source: ReplySource,
}

/// Rejects blank skills; shared with the session-scoped career route.
pub fn require_skills(skills: &str) -> Result<&str, AppError> {
    let skills = skills.trim();
    if skills.is_empty() {
        return Err(AppError::Validation("skills must not be empty".to_string()));
    }
    Ok(skills)
}

/// POST /api/v1/career-suggestions
pub async fn handle_career_suggestions(
    State(state): State<AppState>,
    Json(req): Json<CareerRequest>,
) -> Result<Json<CareerResponse>, AppError> {
    let skills = require_skills(&req.skills)?;
    let outcome = suggest_careers(state.llm.as_ref(), skills, req.resume_text.as_deref()).await;
    Ok(Json(CareerResponse {
        source: outcome.source(),
        suggestions: outcome.into_suggestions(),
    }))
}
