// Document generation: one module per artifact.
// Each builds a prompt, calls the ChatModel, parses the reply and falls back on failure.
// All model calls go through llm_client.

pub mod achievement;
pub mod cover_letter;
pub mod cv;
pub mod formatting;
pub mod gap_analysis;
pub mod greeting;
pub mod handlers;
pub mod job_description;
pub mod posting;
pub mod prompts;
pub mod review;
