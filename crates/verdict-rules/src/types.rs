//! Domain, input, and outcome types for the rule engine

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed note attached to financial estimates when no direct rule
/// applied to the derived values.
pub const ESTIMATE_NOTE: &str = "Inductive estimates (no direct rule applied)";

/// The closed set of reasoning domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Financial,
    Medical,
    Legal,
}

impl Domain {
    /// Parse the wire string from a structured query's `domain` key.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "financial" => Some(Self::Financial),
            "medical" => Some(Self::Medical),
            "legal" => Some(Self::Legal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Medical => "medical",
            Self::Legal => "legal",
        }
    }

    /// Domain names recognized by the engine, for user-facing
    /// "not supported" messages.
    pub fn supported() -> &'static [&'static str] {
        &["financial", "medical", "legal"]
    }
}

/// Which reasoning style a structured query requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningMode {
    Deductive,
    Inductive,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInput {
    pub expected_return: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    pub past_returns: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalInput {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub test_results: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalInput {
    pub case_type: Option<String>,
    pub signed: Option<bool>,
    pub evidence: Option<String>,
    pub consideration: Option<bool>,
}

/// A typed per-domain input, dispatched exhaustively by the engine.
#[derive(Debug, Clone)]
pub enum DomainInput {
    Financial(FinancialInput),
    Medical(MedicalInput),
    Legal(LegalInput),
}

impl DomainInput {
    pub fn domain(&self) -> Domain {
        match self {
            Self::Financial(_) => Domain::Financial,
            Self::Medical(_) => Domain::Medical,
            Self::Legal(_) => Domain::Legal,
        }
    }
}

/// A structured reasoning request: typed input plus requested mode.
#[derive(Debug, Clone)]
pub struct DomainQuery {
    pub input: DomainInput,
    pub mode: ReasoningMode,
}

impl DomainQuery {
    /// Build from a parsed JSON object whose `domain` key named a
    /// recognized domain. Unknown fields are ignored; an unparseable
    /// `reasoningType` falls back to `both`.
    pub fn from_value(domain: Domain, value: &Value) -> serde_json::Result<Self> {
        let mode = value
            .get("reasoningType")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();

        let input = match domain {
            Domain::Financial => DomainInput::Financial(serde_json::from_value(value.clone())?),
            Domain::Medical => DomainInput::Medical(serde_json::from_value(value.clone())?),
            Domain::Legal => DomainInput::Legal(serde_json::from_value(value.clone())?),
        };

        Ok(Self { input, mode })
    }
}

/// Structured estimate produced by financial induction when the
/// derived values did not trigger a deductive rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEstimate {
    pub estimated_return: Option<f64>,
    pub estimated_risk: Option<RiskLevel>,
    pub note: String,
}

/// What one rule application yields: a conclusion string or a
/// structured estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleOutcome {
    Text(String),
    Estimate(FinancialEstimate),
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Estimate(estimate) => {
                let rendered = serde_json::to_string(estimate).map_err(|_| fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    }
}

/// The rule engine's verdict for one structured query, injected into
/// the transcript and then discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningOutcome {
    pub result: RuleOutcome,
    #[serde(rename = "reasoningUsed", skip_serializing_if = "Option::is_none")]
    pub reasoning_used: Option<ReasoningMode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn domain_parsing_is_closed() {
        assert_eq!(Domain::parse("financial"), Some(Domain::Financial));
        assert_eq!(Domain::parse("medical"), Some(Domain::Medical));
        assert_eq!(Domain::parse("legal"), Some(Domain::Legal));
        assert_eq!(Domain::parse("astrology"), None);
        assert_eq!(Domain::parse("Financial"), None);
    }

    #[test]
    fn query_from_value_ignores_unknown_fields() {
        let value = json!({
            "domain": "financial",
            "expectedReturn": 0.06,
            "riskLevel": "low",
            "extra": true
        });

        let query = DomainQuery::from_value(Domain::Financial, &value).unwrap();
        let DomainInput::Financial(input) = query.input else {
            panic!("expected financial input");
        };
        assert_eq!(input.expected_return, Some(0.06));
        assert_eq!(input.risk_level, Some(RiskLevel::Low));
        assert_eq!(query.mode, ReasoningMode::Both);
    }

    #[test]
    fn unrecognized_reasoning_type_falls_back_to_both() {
        let value = json!({"domain": "medical", "symptoms": [], "reasoningType": "abductive"});
        let query = DomainQuery::from_value(Domain::Medical, &value).unwrap();
        assert_eq!(query.mode, ReasoningMode::Both);
    }

    #[test]
    fn outcome_serializes_with_reasoning_tag() {
        let outcome = ReasoningOutcome {
            result: RuleOutcome::Text("Decision: Hold (moderate return/risk)".to_string()),
            reasoning_used: Some(ReasoningMode::Deductive),
        };

        let rendered = serde_json::to_string(&outcome).unwrap();
        assert!(rendered.contains("\"reasoningUsed\":\"deductive\""));
        assert!(rendered.contains("Decision: Hold"));
    }
}
