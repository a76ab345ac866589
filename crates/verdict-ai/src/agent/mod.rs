//! ReAct (Reasoning + Acting) loop implementation.

mod executor;
mod parser;
mod state;

pub use executor::{AgentConfig, AgentExecutor, AgentResult};
pub use parser::{ParsedReply, parse_reply};
pub use state::{AgentState, AgentStatus};
