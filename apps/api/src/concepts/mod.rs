// Concept generation: the Producer that turns an audience into marketing copy,
// and the remix workflow that regenerates copy for a stored audience.
// All LLM calls go through llm_client; nothing here talks HTTP to the provider.

pub mod handlers;
pub mod producer;
pub mod prompts;
pub mod remix;
