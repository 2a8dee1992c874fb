// Résumé text recovery: PDF heuristic, file loader, upload handler.
// Nothing here calls the LLM; output is forwarded to prompt assembly as-is.

pub mod handlers;
pub mod loader;
pub mod pdf;
