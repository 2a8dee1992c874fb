// Career suggestions: prompt assembly, first-array decoding, static fallback.
// All LLM calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod prompts;
pub mod suggestions;
