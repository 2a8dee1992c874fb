//! Text interview turns.
//!
//! The first turn is a scripted greeting. The candidate's reply to it is
//! treated as their résumé and gets a dedicated prompt; every later turn is a
//! follow-up over the recent transcript. Model failures never surface as
//! errors: each prompt has a matching canned reply.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::interview::prompts::{FOLLOW_UP_PROMPT_TEMPLATE, RESUME_SUBMISSION_PROMPT_TEMPLATE};
use crate::interview::InterviewReply;
use crate::llm_client::prompts::{
    fill_template, resume_block, truncate_chars, INTERVIEWER_STYLE, MAX_RESUME_PROMPT_CHARS,
};
use crate::llm_client::{strip_reply_label, TextGenerator};
use crate::models::conversation::ConversationTurn;
use crate::roles::RoleProfile;

/// Only this many trailing turns are quoted in the follow-up prompt.
pub const MAX_HISTORY_TURNS: usize = 8;

pub const RESUME_SUBMISSION_FALLBACK: &str = "Thank you for sharing your background. \
    Based on your experience, could you tell me about a specific project or achievement \
    you're most proud of?";

pub const FOLLOW_UP_FALLBACK: &str =
    "I appreciate your response. Could you provide more specific details about your experience with this?";

/// One candidate turn as seen by `chat_reply`. `history` holds the turns
/// before `message`.
#[derive(Debug, Clone, Copy)]
pub struct ChatTurnInput<'a> {
    pub message: &'a str,
    pub history: &'a [ConversationTurn],
    pub is_first_message: bool,
    pub resume: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnKind {
    ResumeSubmission,
    FollowUp,
}

impl TurnKind {
    fn of(history: &[ConversationTurn]) -> Self {
        if history.len() == 1 {
            TurnKind::ResumeSubmission
        } else {
            TurnKind::FollowUp
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            TurnKind::ResumeSubmission => RESUME_SUBMISSION_FALLBACK,
            TurnKind::FollowUp => FOLLOW_UP_FALLBACK,
        }
    }
}

fn reply_label() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| {
        Regex::new(r"(?i)^(Response:|Your response:|Interviewer:|As the interviewer:|As .*?:)\s*")
            .expect("reply label pattern is valid")
    })
}

/// Greeting plus the request for résumé and portfolio material.
pub fn welcome_message(profile: &RoleProfile) -> String {
    format!(
        "{}\n\nTo conduct a thorough interview, I'd like to review your background first. \
         Could you please share:\n\n\
         1. Your resume or a summary of your experience\n\
         2. Any portfolio links, project links, or relevant work samples\n\
         3. Any other materials you'd like me to consider\n\n\
         Please paste your resume content and any links in your next message.",
        profile.greeting
    )
}

pub fn clean_reply(text: &str) -> String {
    strip_reply_label(text, reply_label())
}

pub fn build_resume_submission_prompt(profile: &RoleProfile, resume: &str) -> String {
    let resume = truncate_chars(resume.trim(), MAX_RESUME_PROMPT_CHARS);
    fill_template(
        RESUME_SUBMISSION_PROMPT_TEMPLATE,
        &[
            ("interviewer_title", profile.interviewer_title.as_str()),
            ("company", profile.company.as_str()),
            ("role", profile.display_name.as_str()),
            ("focus", profile.focus.as_str()),
            ("style", INTERVIEWER_STYLE),
            ("resume", resume.as_str()),
        ],
    )
}

pub fn build_follow_up_prompt(profile: &RoleProfile, input: &ChatTurnInput<'_>) -> String {
    let start = input.history.len().saturating_sub(MAX_HISTORY_TURNS);
    let conversation = input.history[start..]
        .iter()
        .map(ConversationTurn::to_prompt_line)
        .collect::<Vec<_>>()
        .join("\n");

    let resume = resume_block(input.resume, "Not provided");
    fill_template(
        FOLLOW_UP_PROMPT_TEMPLATE,
        &[
            ("interviewer_title", profile.interviewer_title.as_str()),
            ("company", profile.company.as_str()),
            ("role", profile.display_name.as_str()),
            ("focus", profile.focus.as_str()),
            ("next_topic", profile.next_topic(input.history.len())),
            ("style", INTERVIEWER_STYLE),
            ("resume", resume.as_str()),
            ("conversation", conversation.as_str()),
            ("message", input.message.trim()),
        ],
    )
}

/// Produces the interviewer's next turn.
pub async fn chat_reply(
    llm: &dyn TextGenerator,
    profile: &RoleProfile,
    input: &ChatTurnInput<'_>,
) -> InterviewReply {
    if input.is_first_message {
        return InterviewReply::scripted(welcome_message(profile));
    }

    let kind = TurnKind::of(input.history);
    let prompt = match kind {
        TurnKind::ResumeSubmission => build_resume_submission_prompt(profile, input.message),
        TurnKind::FollowUp => build_follow_up_prompt(profile, input),
    };

    match llm.generate(&prompt).await {
        Ok(text) => {
            let cleaned = clean_reply(&text);
            if cleaned.is_empty() {
                warn!("Interviewer reply was only a label, using fallback");
                InterviewReply::fallback(kind.fallback())
            } else {
                InterviewReply::generated(cleaned)
            }
        }
        Err(e) => {
            warn!("Chat interview call failed for role '{}': {e}", profile.id);
            InterviewReply::fallback(kind.fallback())
        }
    }
}
