// In-memory per-user session state for the browser client: active tab,
// uploaded résumé, career suggestions and both interview transcripts.

pub mod handlers;
pub mod store;
