//! Query preprocessing: structured reasoning detection
//!
//! An incoming query may be a JSON object carrying a `domain` key, in
//! which case the rule engine runs first and its result is injected
//! into the transcript as auxiliary context. Parsing is strict JSON
//! and fails closed: anything that does not parse, is not an object,
//! or lacks a `domain` key is plain free text.

use serde_json::Value;
use tracing::debug;
use verdict_rules::{Domain, DomainQuery, RuleEngine};

/// Outcome of preprocessing one raw query.
#[derive(Debug, Clone, PartialEq)]
pub enum Preprocessed {
    /// Plain text query; no auxiliary context.
    FreeText,
    /// Recognized domain; formatted system message to inject after
    /// the protocol message.
    Structured { context: String },
    /// A `domain` key was present but named an unsupported domain.
    UnsupportedDomain { domain: String },
}

/// Preprocess one raw query against the rule engine.
pub fn preprocess(query: &str, rules: &RuleEngine) -> Preprocessed {
    let Ok(value) = serde_json::from_str::<Value>(query) else {
        return Preprocessed::FreeText;
    };
    let Some(domain_str) = value.get("domain").and_then(Value::as_str) else {
        return Preprocessed::FreeText;
    };
    let Some(domain) = Domain::parse(domain_str) else {
        return Preprocessed::UnsupportedDomain {
            domain: domain_str.to_string(),
        };
    };

    match DomainQuery::from_value(domain, &value) {
        Ok(domain_query) => {
            let outcome = rules.process_query(&domain_query);
            let rendered =
                serde_json::to_string(&outcome).unwrap_or_else(|_| outcome.result.to_string());
            Preprocessed::Structured {
                context: format!("Preliminary agentic reasoning result: {rendered}"),
            }
        }
        Err(error) => {
            // Ill-typed fields degrade to free text, never to a
            // query-level error.
            debug!(%error, "structured query fields did not parse, treating as free text");
            Preprocessed::FreeText
        }
    }
}
