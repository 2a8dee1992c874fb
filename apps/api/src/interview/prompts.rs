// All LLM prompt constants for the Interview module.
// Role details are filled in from the catalog's RoleProfile.

/// First turn after the greeting: the candidate's message is their résumé.
/// Replace: {interviewer_title}, {company}, {role}, {resume}, {focus}, {style}
pub const RESUME_SUBMISSION_PROMPT_TEMPLATE: &str = r#"You are {interviewer_title} at {company}. The candidate has just shared their resume/portfolio for the {role} position.

CANDIDATE'S RESUME/PORTFOLIO:
"{resume}"

Your task:
1. Acknowledge receipt of their materials professionally
2. Based on their background, ask ONE specific question about their most relevant experience
3. Focus on something specific from their resume that relates to {focus}
4. Keep response under 80 words
5. {style}

Respond as the interviewer:"#;

/// Every later chat turn.
/// Replace: {interviewer_title}, {company}, {role}, {resume}, {conversation},
/// {message}, {focus}, {next_topic}, {style}
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = r#"You are {interviewer_title} at {company}, interviewing for {role}.

CANDIDATE'S BACKGROUND (from earlier):
{resume}

CONVERSATION:
{conversation}

CANDIDATE'S LATEST RESPONSE:
"{message}"

Based on their response and background:
1. Acknowledge their answer briefly
2. Ask ONE follow-up question that builds on what they said
3. Reference their background when relevant
4. Focus on: {focus}
5. If the current topic feels covered, move towards: {next_topic}
6. Keep under 80 words
7. {style}

Respond as the interviewer:"#;

/// Voice question generation. `{number}` is one-based.
/// Replace: {role}, {number}, {previous}, {resume}, {spoken}
pub const VOICE_QUESTION_PROMPT_TEMPLATE: &str = r#"You are conducting a voice interview for a {role} position. This is question {number}.

CANDIDATE'S BACKGROUND:
{resume}

Generate ONE specific interview question based on their background. The question should:
- Be directly related to their experience or skills mentioned in their resume
- Be appropriate for a {role} role
- Be conversational and suitable for voice interview
- Reference specific projects, technologies, or experiences from their background
- Be under 30 words

If this is question 1, start with asking about a specific project or experience from their resume.
Otherwise, {previous} questions have been asked already: ask about a different aspect of their background.
{spoken}

Question:"#;

/// Replace: {role}, {answer}, {spoken}
pub const VOICE_FEEDBACK_PROMPT_TEMPLATE: &str = r#"As an interviewer for {role}, provide brief feedback on this answer:

"{answer}"

{spoken}

Feedback (1-2 sentences, encouraging):"#;
