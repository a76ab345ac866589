//! Verdict AI - ReAct decision loop over pluggable completion backends
//!
//! This crate provides:
//! - ReAct (Reasoning + Acting) loop bounded by a step budget
//! - Completion client abstraction with Gemini and OpenRouter backends
//! - Tool trait, registry, and the arithmetic calculator tool

pub mod agent;
pub mod error;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agent::{
    AgentConfig, AgentExecutor, AgentResult, AgentState, AgentStatus, ParsedReply, parse_reply,
};
pub use error::{AiError, Result};
pub use llm::{GeminiClient, LlmClient, Message, MockLlmClient, MockStep, OpenRouterClient, Role};
pub use tools::{CalculatorTool, Tool, ToolRegistry};
