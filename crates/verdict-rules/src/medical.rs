//! Medical diagnosis rules
//!
//! Deduction checks symptom combinations and test results in fixed
//! precedence. Induction scores each reference case by symptom
//! overlap and keeps the first strictly-best match in table order.

use crate::types::{MedicalInput, RuleOutcome};

/// One reference case: a symptom set and its diagnosis.
#[derive(Debug, Clone)]
pub struct MedicalCase {
    pub symptoms: Vec<String>,
    pub diagnosis: String,
}

impl MedicalCase {
    pub fn new(symptoms: &[&str], diagnosis: &str) -> Self {
        Self {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            diagnosis: diagnosis.to_string(),
        }
    }
}

/// The built-in reference table, loaded once at engine construction.
pub(crate) fn builtin_cases() -> Vec<MedicalCase> {
    vec![
        MedicalCase::new(&["fever", "cough", "headache"], "Flu"),
        MedicalCase::new(&["fever", "cough"], "Common Cold"),
        MedicalCase::new(&["fever", "rash"], "Measles"),
        MedicalCase::new(&["cough", "shortness of breath"], "Asthma"),
    ]
}

pub(crate) fn deduce(input: &MedicalInput) -> Option<String> {
    let has = |symptom: &str| input.symptoms.iter().any(|s| s == symptom);

    if has("fever") && has("rash") {
        return Some("Diagnosis: Measles (fever + rash)".to_string());
    }
    if has("fever")
        && has("cough")
        && input.test_results.get("chestXRay").map(String::as_str) == Some("patchy")
    {
        return Some("Diagnosis: Pneumonia (fever, cough, patchy x-ray)".to_string());
    }
    if has("chest pain") && has("shortness of breath") {
        return Some("Diagnosis: Possible Heart Attack (chest pain + breathing issues)".to_string());
    }
    None
}

pub(crate) fn induce(input: &MedicalInput, cases: &[MedicalCase]) -> RuleOutcome {
    let mut best: Option<(&MedicalCase, usize)> = None;
    for case in cases {
        let overlap = case
            .symptoms
            .iter()
            .filter(|s| input.symptoms.contains(s))
            .count();
        // Strictly greater: ties keep the earlier table entry.
        if overlap > 0 && best.is_none_or(|(_, count)| overlap > count) {
            best = Some((case, overlap));
        }
    }

    RuleOutcome::Text(match best {
        Some((case, _)) => format!("Possible Diagnosis: {} (similar cases)", case.diagnosis),
        None => "Diagnosis unclear (no close match)".to_string(),
    })
}
