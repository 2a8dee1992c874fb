//! Interview role catalog: the single source of interviewer personas,
//! focus areas, interview flow and question banks, keyed by role id.
//!
//! Built-in profiles live in `builtin.rs`. A deployment may replace them with
//! a JSON file (`ROLE_CATALOG_PATH`). Prompt functions receive `&RoleProfile`
//! and never look roles up themselves.

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

mod builtin;

/// Topic used once the interview flow is exhausted.
const WRAP_UP_TOPIC: &str = "wrap-up questions";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub id: String,
    pub display_name: String,
    pub interviewer_title: String,
    pub company: String,
    pub greeting: String,
    pub focus: String,
    pub interview_flow: Vec<String>,
    /// Static questions used when question generation fails.
    #[serde(default)]
    pub question_bank: Vec<String>,
}

impl RoleProfile {
    /// Generic interviewer used for role ids the catalog does not know.
    pub fn generic(role_id: &str) -> Self {
        Self {
            id: role_id.to_string(),
            display_name: display_name_from_id(role_id),
            interviewer_title: "Hiring Manager".to_string(),
            company: "Professional Corp".to_string(),
            greeting: "Good morning/afternoon. Thank you for your interest in this position."
                .to_string(),
            focus: "professional experience and skills".to_string(),
            interview_flow: ["Background", "Experience", "Skills", "Goals"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            question_bank: Vec::new(),
        }
    }

    /// Topic after the current stage, where each stage spans two turns.
    pub fn next_topic(&self, history_len: usize) -> &str {
        if self.interview_flow.is_empty() {
            return WRAP_UP_TOPIC;
        }
        let stage = (history_len / 2).min(self.interview_flow.len() - 1);
        self.interview_flow
            .get(stage + 1)
            .map(String::as_str)
            .unwrap_or(WRAP_UP_TOPIC)
    }
}

/// "data-scientist" → "data scientist".
fn display_name_from_id(role_id: &str) -> String {
    let name = role_id.trim().replace(['-', '_'], " ");
    if name.is_empty() {
        "general".to_string()
    } else {
        name
    }
}

#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn builtin() -> Self {
        Self {
            roles: builtin::profiles(),
        }
    }

    /// Validates ids (non-empty, unique) and wraps the profiles.
    pub fn from_profiles(roles: Vec<RoleProfile>) -> Result<Self> {
        if roles.is_empty() {
            bail!("role catalog must contain at least one role");
        }
        let mut seen = HashSet::new();
        for role in &roles {
            if role.id.trim().is_empty() {
                bail!("role catalog contains a role with an empty id");
            }
            if !seen.insert(role.id.as_str()) {
                bail!("role catalog contains duplicate id '{}'", role.id);
            }
        }
        Ok(Self { roles })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role catalog {}", path.display()))?;
        let roles: Vec<RoleProfile> = serde_json::from_str(&raw)
            .with_context(|| format!("Role catalog {} is not valid JSON", path.display()))?;
        Self::from_profiles(roles)
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn get(&self, role_id: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.id == role_id)
    }

    /// Known profile, or the generic interviewer named after `role_id`.
    pub fn resolve(&self, role_id: &str) -> Cow<'_, RoleProfile> {
        match self.get(role_id) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(RoleProfile::generic(role_id)),
        }
    }
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.roles.roles().to_vec())
}
