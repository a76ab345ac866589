//! Agent executor with ReAct loop

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::agent::parser::{ParsedReply, parse_reply};
use crate::agent::state::{AgentState, AgentStatus};
use crate::error::{AiError, Result};
use crate::llm::{LlmClient, Message};
use crate::tools::ToolRegistry;

/// Configuration for one agent run
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// The user query
    pub query: String,
    /// Tool-use protocol instructions; always the first transcript
    /// message
    pub system_prompt: String,
    /// Auxiliary context injected after the protocol message and
    /// before the user query
    pub preliminary_context: Option<String>,
    /// Round-trip budget through the model
    pub max_iterations: usize,
    /// Timeout for each completion call, separate from the iteration
    /// budget
    pub completion_timeout: Duration,
    /// Timeout for each tool execution
    pub tool_timeout: Duration,
}

impl AgentConfig {
    pub fn new(query: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            system_prompt: system_prompt.into(),
            preliminary_context: None,
            max_iterations: 10,
            completion_timeout: Duration::from_secs(30),
            tool_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_preliminary_context(mut self, context: impl Into<String>) -> Self {
        self.preliminary_context = Some(context.into());
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }
}

/// Result of one agent run
#[derive(Debug)]
pub struct AgentResult {
    pub success: bool,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub iterations: usize,
    pub state: AgentState,
}

/// Drives one query through the ReAct loop.
///
/// Each run owns its transcript and proceeds strictly sequentially:
/// one completion call, one parse, at most one tool execution per
/// round trip. Dropping the returned future cancels the run at its
/// next suspension point.
pub struct AgentExecutor {
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
}

impl AgentExecutor {
    /// Create a new agent executor
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<ToolRegistry>) -> Self {
        Self { llm, tools }
    }

    /// Run the loop to a final answer or budget exhaustion.
    ///
    /// Upstream failures (backend error, timeout) return `Err`;
    /// budget exhaustion returns `Ok` with `MaxIterations` status so
    /// the two are distinguishable at the caller.
    pub async fn run(&self, config: AgentConfig) -> Result<AgentResult> {
        let execution_id = uuid::Uuid::new_v4().to_string();
        let mut state = AgentState::new(execution_id, config.max_iterations);

        state.add_message(Message::system(&config.system_prompt));
        if let Some(context) = &config.preliminary_context {
            state.add_message(Message::system(context));
        }
        state.add_message(Message::user(&config.query));

        while state.iteration < state.max_iterations && !state.is_terminal() {
            let reply = match timeout(
                config.completion_timeout,
                self.llm.complete(&state.messages),
            )
            .await
            {
                Ok(result) => result?,
                Err(_) => return Err(AiError::Timeout(config.completion_timeout)),
            };

            // Appended even when a tool action follows, so the
            // transcript audits every model turn.
            state.add_message(Message::assistant(&reply));

            match parse_reply(&reply) {
                ParsedReply::FinalAnswer(answer) => {
                    state.complete(answer);
                }
                ParsedReply::Bare(text) if !text.is_empty() => {
                    // No marker at all: accept the reply as an
                    // implicit final answer.
                    state.complete(text);
                }
                ParsedReply::Bare(_) => {
                    debug!(iteration = state.iteration, "empty reply, continuing");
                }
                ParsedReply::Action { tool, input } => {
                    let observation = self.execute_tool(&tool, &input, config.tool_timeout).await;
                    debug!(tool = %tool, observation = %observation, "tool executed");
                    state.add_message(Message::system(format!("Observation: {observation}")));
                }
            }

            state.increment_iteration();
        }

        let success = matches!(state.status, AgentStatus::Completed);
        Ok(AgentResult {
            success,
            answer: state.final_answer.clone(),
            error: match &state.status {
                AgentStatus::MaxIterations => Some(format!(
                    "no final answer within step limit ({} iterations)",
                    state.max_iterations
                )),
                _ => None,
            },
            iterations: state.iteration,
            state,
        })
    }

    /// Tool failures never abort the loop; every outcome becomes an
    /// observation string.
    async fn execute_tool(&self, name: &str, input: &str, tool_timeout: Duration) -> String {
        let Some(tool) = self.tools.get(name) else {
            return format!("Tool \"{name}\" not found");
        };
        match timeout(tool_timeout, tool.execute(input)).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => format!("Error: {e}"),
            Err(_) => format!("Error: tool {name} timed out"),
        }
    }
}
