//! Voice interview practice: five generated questions, brief spoken feedback
//! after each answer, then a scripted close.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::interview::prompts::{VOICE_FEEDBACK_PROMPT_TEMPLATE, VOICE_QUESTION_PROMPT_TEMPLATE};
use crate::interview::InterviewReply;
use crate::llm_client::prompts::{fill_template, resume_block, truncate_chars, SPOKEN_STYLE};
use crate::llm_client::{strip_reply_label, ReplySource, TextGenerator};
use crate::roles::RoleProfile;

pub const MAX_QUESTIONS: u32 = 5;

pub const CLOSING_MESSAGE: &str = "Thank you for completing the interview practice. \
    You provided excellent insights! This concludes our session.";

pub const FEEDBACK_FALLBACK: &str = "Thank you for your thoughtful answer. Let's continue.";

/// Answers are quoted in the feedback prompt up to this many characters.
const MAX_ANSWER_PROMPT_CHARS: usize = 2000;

const GENERIC_QUESTIONS: [&str; 5] = [
    "Tell me about a project you're most proud of from your background.",
    "What's the most challenging problem you've solved in your experience?",
    "How do you approach learning new technologies or skills?",
    "Describe a time when you had to work under pressure.",
    "What motivates you most in your professional work?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceQuestion {
    pub text: String,
    pub has_more_questions: bool,
    pub source: ReplySource,
}

fn question_label() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"(?i)^Question:\s*").expect("question label pattern is valid"))
}

fn feedback_label() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| Regex::new(r"(?i)^Feedback:\s*").expect("feedback label pattern is valid"))
}

/// Static question for a zero-based index: the role's own bank first, then
/// the generic list.
pub fn fallback_question(profile: &RoleProfile, question_number: u32) -> &str {
    let idx = question_number as usize;
    profile
        .question_bank
        .get(idx)
        .map(String::as_str)
        .unwrap_or(GENERIC_QUESTIONS[idx % GENERIC_QUESTIONS.len()])
}

pub fn build_question_prompt(
    profile: &RoleProfile,
    question_number: u32,
    resume: Option<&str>,
) -> String {
    let number = (question_number + 1).to_string();
    let previous = question_number.to_string();
    let resume = resume_block(resume, "No resume provided");
    fill_template(
        VOICE_QUESTION_PROMPT_TEMPLATE,
        &[
            ("role", profile.display_name.as_str()),
            ("number", number.as_str()),
            ("previous", previous.as_str()),
            ("spoken", SPOKEN_STYLE),
            ("resume", resume.as_str()),
        ],
    )
}

pub fn build_feedback_prompt(profile: &RoleProfile, answer: &str) -> String {
    let answer = truncate_chars(answer.trim(), MAX_ANSWER_PROMPT_CHARS);
    fill_template(
        VOICE_FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("role", profile.display_name.as_str()),
            ("spoken", SPOKEN_STYLE),
            ("answer", answer.as_str()),
        ],
    )
}

/// Question `question_number` (zero-based), or the closing message once all
/// questions have been asked.
pub async fn next_question(
    llm: &dyn TextGenerator,
    profile: &RoleProfile,
    question_number: u32,
    resume: Option<&str>,
) -> VoiceQuestion {
    if question_number >= MAX_QUESTIONS {
        return VoiceQuestion {
            text: CLOSING_MESSAGE.to_string(),
            has_more_questions: false,
            source: ReplySource::Scripted,
        };
    }

    let has_more_questions = question_number < MAX_QUESTIONS - 1;
    let prompt = build_question_prompt(profile, question_number, resume);
    let generated = match llm.generate(&prompt).await {
        Ok(text) => Some(strip_reply_label(&text, question_label())).filter(|q| !q.is_empty()),
        Err(e) => {
            warn!(
                "Voice question {} generation failed for role '{}': {e}",
                question_number + 1,
                profile.id
            );
            None
        }
    };

    match generated {
        Some(text) => VoiceQuestion {
            text,
            has_more_questions,
            source: ReplySource::Generated,
        },
        None => VoiceQuestion {
            text: fallback_question(profile, question_number).to_string(),
            has_more_questions,
            source: ReplySource::Fallback,
        },
    }
}

/// One or two encouraging sentences about `answer`.
pub async fn answer_feedback(
    llm: &dyn TextGenerator,
    profile: &RoleProfile,
    answer: &str,
) -> InterviewReply {
    let prompt = build_feedback_prompt(profile, answer);
    match llm.generate(&prompt).await {
        Ok(text) => {
            let feedback = strip_reply_label(&text, feedback_label());
            if feedback.is_empty() {
                InterviewReply::fallback(FEEDBACK_FALLBACK)
            } else {
                InterviewReply::generated(feedback)
            }
        }
        Err(e) => {
            warn!("Voice feedback call failed for role '{}': {e}", profile.id);
            InterviewReply::fallback(FEEDBACK_FALLBACK)
        }
    }
}
