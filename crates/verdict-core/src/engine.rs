//! Decision engine service
//!
//! Wires the preprocessor, rule engine, tool registry, and ReAct
//! executor together behind a single `answer` operation. One engine
//! serves many queries; each query runs an independent executor with
//! its own transcript.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use verdict_ai::{
    AgentConfig, AgentExecutor, AiError, CalculatorTool, LlmClient, Result, ToolRegistry,
};
use verdict_rules::{Domain, RuleEngine};

use crate::config::EngineConfig;
use crate::preprocess::{Preprocessed, preprocess};

/// Final answer for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineAnswer {
    pub answer: String,
    pub iterations: usize,
}

/// The decision engine behind the `answer` operation.
pub struct DecisionEngine {
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
    rules: Arc<RuleEngine>,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Build from explicit parts. Tests inject a scripted client here.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        tools: Arc<ToolRegistry>,
        rules: Arc<RuleEngine>,
        config: EngineConfig,
    ) -> Self {
        Self {
            llm,
            tools,
            rules,
            config,
        }
    }

    /// Build from the environment; fails fast when no completion
    /// backend is configured.
    pub fn from_env() -> Result<Self> {
        let config = EngineConfig::from_env()?;
        let llm = config.build_client();
        info!(
            provider = llm.provider(),
            model = llm.model(),
            "decision engine configured"
        );
        Ok(Self::new(
            llm,
            Arc::new(default_tools()),
            Arc::new(RuleEngine::builtin()),
            config,
        ))
    }

    /// Answer one query.
    ///
    /// Structured queries run the rule engine first; its result is
    /// injected as auxiliary context before the ReAct loop begins.
    pub async fn answer(&self, query: &str) -> Result<EngineAnswer> {
        let preliminary = match preprocess(query, &self.rules) {
            Preprocessed::FreeText => None,
            Preprocessed::Structured { context } => {
                debug!("injecting rule engine context");
                Some(context)
            }
            Preprocessed::UnsupportedDomain { domain } => {
                // Answered through the normal success path, without a
                // model round trip.
                return Ok(EngineAnswer {
                    answer: format!(
                        "The domain \"{domain}\" is not supported. Supported domains: {}.",
                        Domain::supported().join(", ")
                    ),
                    iterations: 0,
                });
            }
        };

        let executor = AgentExecutor::new(self.llm.clone(), self.tools.clone());
        let mut agent_config = AgentConfig::new(query, self.system_prompt())
            .with_max_iterations(self.config.max_iterations)
            .with_completion_timeout(self.config.completion_timeout)
            .with_tool_timeout(self.config.tool_timeout);
        if let Some(context) = preliminary {
            agent_config = agent_config.with_preliminary_context(context);
        }

        let result = executor.run(agent_config).await?;
        if result.success {
            info!(iterations = result.iterations, "query answered");
            return Ok(EngineAnswer {
                answer: result.answer.unwrap_or_default(),
                iterations: result.iterations,
            });
        }
        Err(AiError::MaxIterations(self.config.max_iterations))
    }

    fn system_prompt(&self) -> String {
        build_system_prompt(&self.tools)
    }
}

/// Default tool set: the calculator. Extended by registration, not by
/// modifying the loop.
pub fn default_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(CalculatorTool::new());
    registry
}

/// Tool-use protocol instructions; always the first transcript
/// message.
pub fn build_system_prompt(tools: &ToolRegistry) -> String {
    format!(
        "You are a smart assistant with access to these tools:\n\
         {}\n\n\
         When answering user, you may use tools to gather info or calculate results.\n\
         Follow this format exactly:\n\
         Thought: <reasoning>\n\
         Action: <ToolName>[<input>]\n\
         Observation: <tool result>\n\
         ...(repeat as needed)...\n\
         Thought: <final reasoning>\n\
         Answer: <final answer>\n\n\
         Only one action at a time, wait for observation before continuing.\n\
         If answer is known or enough info is gathered, output final Answer.\n",
        tools.descriptions().join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_lists_registered_tools() {
        let prompt = build_system_prompt(&default_tools());
        assert!(prompt.contains("Calculator: Performs arithmetic calculations."));
        assert!(prompt.contains("Answer: <final answer>"));
    }
}
