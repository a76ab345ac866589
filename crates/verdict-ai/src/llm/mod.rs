//! LLM module - completion backend abstraction

mod client;
mod gemini;
mod mock_client;
mod openrouter;

pub use client::{LlmClient, Message, Role};
pub use gemini::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use mock_client::{MockLlmClient, MockStep};
pub use openrouter::{DEFAULT_OPENROUTER_MODEL, OpenRouterClient};
