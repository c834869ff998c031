// Podcast content generation: outline, interview questions, titles, research.
// All model calls go through llm_client::TextModel; nothing here calls Gemini directly.

pub mod formatting;
pub mod generator;
pub mod handlers;
pub mod kinds;
pub mod prompts;
