//! Legal outcome rules
//!
//! Deduction covers contract and criminal case types with exact
//! conditions. Induction scans the reference table in order; a record
//! with neither `signed` nor `evidence` acts as a catch-all for its
//! case type.

use crate::types::{LegalInput, RuleOutcome};

/// One reference case from past outcomes.
#[derive(Debug, Clone)]
pub struct LegalCase {
    pub case_type: String,
    pub signed: Option<bool>,
    pub evidence: Option<String>,
    pub outcome: String,
}

impl LegalCase {
    pub fn new(
        case_type: &str,
        signed: Option<bool>,
        evidence: Option<&str>,
        outcome: &str,
    ) -> Self {
        Self {
            case_type: case_type.to_string(),
            signed,
            evidence: evidence.map(|e| e.to_string()),
            outcome: outcome.to_string(),
        }
    }
}

/// The built-in reference table, loaded once at engine construction.
pub(crate) fn builtin_cases() -> Vec<LegalCase> {
    vec![
        LegalCase::new(
            "contract",
            Some(false),
            None,
            "Contract declared void (no signature)",
        ),
        LegalCase::new("contract", Some(true), None, "Contract enforced by court"),
        LegalCase::new("criminal", None, Some("weak"), "Not guilty verdict"),
        LegalCase::new("criminal", None, Some("strong"), "Guilty verdict"),
        // No signed/evidence field: catch-all for civil cases.
        LegalCase::new("civil", None, None, "Case settled out of court"),
    ]
}

pub(crate) fn deduce(input: &LegalInput) -> Option<String> {
    match input.case_type.as_deref() {
        Some("contract") => {
            if input.signed == Some(false) {
                return Some("Legal Outcome: Contract invalid (no signature)".to_string());
            }
            if input.signed == Some(true) && input.consideration != Some(false) {
                return Some("Legal Outcome: Contract likely enforceable".to_string());
            }
            None
        }
        Some("criminal") => match input.evidence.as_deref() {
            Some("strong") => Some("Legal Outcome: Likely conviction".to_string()),
            Some("weak") => Some("Legal Outcome: Likely acquittal".to_string()),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn induce(input: &LegalInput, cases: &[LegalCase]) -> RuleOutcome {
    for case in cases {
        if input.case_type.as_deref() != Some(case.case_type.as_str()) {
            continue;
        }

        let matches_signed = case.signed.is_some() && case.signed == input.signed;
        let matches_evidence = case.evidence.is_some() && case.evidence == input.evidence;
        let catch_all = case.signed.is_none() && case.evidence.is_none();

        if matches_signed || matches_evidence || catch_all {
            return RuleOutcome::Text(format!(
                "Likely Outcome: {} (similar past case)",
                case.outcome
            ));
        }
    }

    RuleOutcome::Text("Outcome unclear (no similar cases)".to_string())
}
