//! Startup configuration
//!
//! Which completion backend to use and its credentials are read from
//! the environment exactly once at process start. A process with no
//! usable backend must not begin accepting queries.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use verdict_ai::llm::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENROUTER_MODEL};
use verdict_ai::{AiError, GeminiClient, LlmClient, OpenRouterClient, Result};

pub const DEFAULT_MAX_ITERATIONS: usize = 10;

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// The configured completion backend, decided once at startup by
/// which credential is present. Gemini wins when both are set.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Gemini {
        api_key: String,
        model: String,
        base_url: Option<String>,
    },
    OpenRouter {
        api_key: String,
        model: String,
    },
}

/// Engine configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub backend: BackendConfig,
    pub max_iterations: usize,
    pub completion_timeout: Duration,
    pub tool_timeout: Duration,
}

impl EngineConfig {
    /// Load from the environment.
    ///
    /// Absence of every backend credential is a fatal configuration
    /// error, raised here rather than on the first query.
    pub fn from_env() -> Result<Self> {
        let backend = if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            BackendConfig::Gemini {
                api_key,
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: env::var("GEMINI_BASE_URL").ok(),
            }
        } else if let Ok(api_key) = env::var("OPENROUTER_API_KEY") {
            BackendConfig::OpenRouter {
                api_key,
                model: env::var("OPENROUTER_MODEL")
                    .unwrap_or_else(|_| DEFAULT_OPENROUTER_MODEL.to_string()),
            }
        } else {
            return Err(AiError::Config(
                "missing GEMINI_API_KEY or OPENROUTER_API_KEY in environment".to_string(),
            ));
        };

        let max_iterations = env::var("VERDICT_MAX_ITERATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ITERATIONS);

        Ok(Self {
            backend,
            max_iterations,
            completion_timeout: DEFAULT_CALL_TIMEOUT,
            tool_timeout: DEFAULT_CALL_TIMEOUT,
        })
    }

    /// Build the configured completion client.
    pub fn build_client(&self) -> Arc<dyn LlmClient> {
        match &self.backend {
            BackendConfig::Gemini {
                api_key,
                model,
                base_url,
            } => {
                let mut client = GeminiClient::new(api_key.clone()).with_model(model.clone());
                if let Some(url) = base_url {
                    client = client.with_base_url(url.clone());
                }
                Arc::new(client)
            }
            BackendConfig::OpenRouter { api_key, model } => {
                Arc::new(OpenRouterClient::new(api_key.clone()).with_model(model.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_client_matches_backend() {
        let config = EngineConfig {
            backend: BackendConfig::OpenRouter {
                api_key: "k".to_string(),
                model: "m".to_string(),
            },
            max_iterations: DEFAULT_MAX_ITERATIONS,
            completion_timeout: DEFAULT_CALL_TIMEOUT,
            tool_timeout: DEFAULT_CALL_TIMEOUT,
        };
        let client = config.build_client();
        assert_eq!(client.provider(), "openrouter");
        assert_eq!(client.model(), "m");

        let config = EngineConfig {
            backend: BackendConfig::Gemini {
                api_key: "k".to_string(),
                model: "g".to_string(),
                base_url: None,
            },
            ..config
        };
        let client = config.build_client();
        assert_eq!(client.provider(), "gemini");
        assert_eq!(client.model(), "g");
    }
}
