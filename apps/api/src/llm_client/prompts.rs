// Shared prompt constants and prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Résumé text beyond this many characters is cut before it is quoted in a prompt.
pub const MAX_RESUME_PROMPT_CHARS: usize = 4000;

/// Instruction appended to prompts whose output is decoded as a JSON array.
pub const JSON_ARRAY_ONLY: &str = "\
    Respond with ONLY a valid JSON array. \
    Do NOT include any text before or after the array. \
    Do NOT use markdown code fences.";

/// Tone shared by every interviewer persona.
pub const INTERVIEWER_STYLE: &str = "Stay formal and professional. \
    Ask exactly ONE question per reply. \
    Never answer on the candidate's behalf.";

/// Voice replies are read aloud by speech synthesis.
pub const SPOKEN_STYLE: &str = "The text will be spoken aloud: \
    no lists, no markdown, no emoji, short sentences.";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Replaces every `{name}` in `template` with its value in one pass, so text
/// inserted for one placeholder is never scanned for another. Unknown
/// placeholders are left as they are.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Quotes résumé text for a prompt, or `placeholder` when none was supplied.
pub fn resume_block(resume: Option<&str>, placeholder: &str) -> String {
    match resume.map(str::trim).filter(|r| !r.is_empty()) {
        Some(text) => truncate_chars(text, MAX_RESUME_PROMPT_CHARS),
        None => placeholder.to_string(),
    }
}

/// Cuts `text` to at most `max` characters, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_block_uses_placeholder_for_blank_input() {
        assert_eq!(resume_block(None, "Not provided"), "Not provided");
        assert_eq!(resume_block(Some("   \n"), "Not provided"), "Not provided");
    }

    #[test]
    fn test_resume_block_trims_and_truncates() {
        let long = "a".repeat(MAX_RESUME_PROMPT_CHARS + 50);
        assert_eq!(
            resume_block(Some(&long), "-").len(),
            MAX_RESUME_PROMPT_CHARS
        );
        assert_eq!(resume_block(Some("  Rust dev  "), "-"), "Rust dev");
    }

    #[test]
    fn test_fill_template_does_not_rescan_inserted_text() {
        let filled = fill_template("A={a} B={b}", &[("a", "{b}"), ("b", "bee")]);
        assert_eq!(filled, "A={b} B=bee");
    }

    #[test]
    fn test_fill_template_keeps_unknown_placeholders() {
        assert_eq!(fill_template("{known} {other}", &[("known", "x")]), "x {other}");
    }

    #[test]
    fn test_truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("résumé", 3), "rés");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
