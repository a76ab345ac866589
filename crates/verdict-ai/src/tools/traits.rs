//! Tool trait for agent capabilities

use async_trait::async_trait;

use crate::error::Result;

/// Core trait for agent tools
///
/// Tools are invoked from `Action: <name>[<input>]` markers in model
/// output. Implementations must be `Send + Sync`; they are registered
/// once at startup and shared read-only across concurrent queries.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (matched case-insensitively by the registry)
    fn name(&self) -> &str;

    /// Human-readable description, used to build the system prompt
    fn description(&self) -> &str;

    /// Execute the tool with the raw marker input
    async fn execute(&self, input: &str) -> Result<String>;
}
