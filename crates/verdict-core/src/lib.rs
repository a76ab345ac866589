//! Verdict Core - decision engine service
//!
//! Ties the rule engine and the ReAct agent together: structured
//! queries are routed through domain rules first, and the rule result
//! is handed to the agent as auxiliary context.

pub mod config;
pub mod engine;
pub mod preprocess;

pub use config::{BackendConfig, EngineConfig};
pub use engine::{DecisionEngine, EngineAnswer, build_system_prompt, default_tools};
pub use preprocess::{Preprocessed, preprocess};
