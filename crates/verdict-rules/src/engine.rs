//! Rule engine dispatcher
//!
//! Deduction first, induction as fallback. The engine owns its
//! immutable reference tables; one instance is shared read-only
//! across concurrent queries.

use tracing::debug;

use crate::legal::LegalCase;
use crate::medical::MedicalCase;
use crate::types::{DomainInput, DomainQuery, ReasoningMode, ReasoningOutcome, RuleOutcome};
use crate::{financial, legal, medical};

const NO_DEDUCTIVE: &str = "No deductive conclusion possible with given info.";

/// Deterministic deductive rules plus similarity-based inductive
/// fallbacks over the three supported domains.
pub struct RuleEngine {
    medical_cases: Vec<MedicalCase>,
    legal_cases: Vec<LegalCase>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleEngine {
    /// Engine with the built-in reference tables.
    pub fn builtin() -> Self {
        Self {
            medical_cases: medical::builtin_cases(),
            legal_cases: legal::builtin_cases(),
        }
    }

    /// Engine with caller-provided reference tables.
    pub fn new(medical_cases: Vec<MedicalCase>, legal_cases: Vec<LegalCase>) -> Self {
        Self {
            medical_cases,
            legal_cases,
        }
    }

    /// Exact-condition rules; `None` when no rule fires.
    pub fn apply_deductive(&self, input: &DomainInput) -> Option<String> {
        match input {
            DomainInput::Financial(f) => financial::deduce(f),
            DomainInput::Medical(m) => medical::deduce(m),
            DomainInput::Legal(l) => legal::deduce(l),
        }
    }

    /// Similarity/statistics fallback; always yields an outcome,
    /// possibly an "unclear" one.
    pub fn apply_inductive(&self, input: &DomainInput) -> RuleOutcome {
        match input {
            DomainInput::Financial(f) => financial::induce(f),
            DomainInput::Medical(m) => medical::induce(m, &self.medical_cases),
            DomainInput::Legal(l) => legal::induce(l, &self.legal_cases),
        }
    }

    /// Dispatch one structured query per its requested reasoning mode.
    ///
    /// `both` tries deduction first and only falls through to
    /// induction when no deductive rule fired.
    pub fn process_query(&self, query: &DomainQuery) -> ReasoningOutcome {
        debug!(domain = query.input.domain().as_str(), mode = ?query.mode, "rule engine dispatch");

        match query.mode {
            ReasoningMode::Deductive => ReasoningOutcome {
                result: RuleOutcome::Text(
                    self.apply_deductive(&query.input)
                        .unwrap_or_else(|| NO_DEDUCTIVE.to_string()),
                ),
                reasoning_used: None,
            },
            ReasoningMode::Inductive => ReasoningOutcome {
                result: self.apply_inductive(&query.input),
                reasoning_used: None,
            },
            ReasoningMode::Both => match self.apply_deductive(&query.input) {
                Some(conclusion) => ReasoningOutcome {
                    result: RuleOutcome::Text(conclusion),
                    reasoning_used: Some(ReasoningMode::Deductive),
                },
                None => ReasoningOutcome {
                    result: self.apply_inductive(&query.input),
                    reasoning_used: Some(ReasoningMode::Inductive),
                },
            },
        }
    }
}
