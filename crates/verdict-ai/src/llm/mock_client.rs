//! Deterministic mock LLM client for loop and orchestration tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AiError, Result};
use crate::llm::client::{LlmClient, Message, Role};

/// Scripted step for deterministic mock completions.
#[derive(Debug, Clone)]
pub enum MockStep {
    /// Return a plain assistant reply.
    Text(String),
    /// Fail the completion with an upstream error.
    Error(String),
}

impl MockStep {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// A deterministic mock LLM client driven by scripted steps.
///
/// When the script runs out, it echoes the latest user message, so
/// tests fail loudly on unexpected extra round trips.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    model: String,
    script: Arc<Mutex<VecDeque<MockStep>>>,
}

impl MockLlmClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn from_steps(model: impl Into<String>, steps: Vec<MockStep>) -> Self {
        Self {
            model: model.into(),
            script: Arc::new(Mutex::new(VecDeque::from(steps))),
        }
    }

    pub async fn push_step(&self, step: MockStep) {
        self.script.lock().await.push_back(step);
    }

    async fn next_step(&self) -> Option<MockStep> {
        self.script.lock().await.pop_front()
    }

    fn fallback_reply(messages: &[Message]) -> String {
        messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| format!("mock-echo: {}", m.content))
            .unwrap_or_else(|| "mock-ok".to_string())
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> Result<String> {
        match self.next_step().await {
            Some(MockStep::Text(content)) => Ok(content),
            Some(MockStep::Error(message)) => Err(AiError::UpstreamMalformed(message)),
            None => Ok(Self::fallback_reply(messages)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_scripted_text_in_order() {
        let client =
            MockLlmClient::from_steps("mock-model", vec![MockStep::text("a"), MockStep::text("b")]);

        let first = client.complete(&[Message::user("ping")]).await.unwrap();
        let second = client.complete(&[Message::user("ping")]).await.unwrap();

        assert_eq!(first, "a");
        assert_eq!(second, "b");
    }

    #[tokio::test]
    async fn exhausted_script_echoes_user_message() {
        let client = MockLlmClient::new("mock-model");

        let reply = client.complete(&[Message::user("hello")]).await.unwrap();

        assert_eq!(reply, "mock-echo: hello");
    }

    #[tokio::test]
    async fn scripted_error_surfaces_as_upstream_failure() {
        let client = MockLlmClient::from_steps("mock-model", vec![MockStep::error("down")]);

        let err = client.complete(&[Message::user("hi")]).await.unwrap_err();

        assert!(matches!(err, AiError::UpstreamMalformed(_)));
    }
}
