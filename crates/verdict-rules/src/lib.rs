//! Verdict rules - hybrid deductive/inductive rule engine
//!
//! Deterministic deductive rules plus similarity-based inductive
//! fallbacks over three domains (financial, medical, legal). The
//! reference case tables are immutable, owned by the engine, and
//! shared read-only across concurrent queries.

mod engine;
mod financial;
mod legal;
mod medical;
mod types;

pub use engine::RuleEngine;
pub use legal::LegalCase;
pub use medical::MedicalCase;
pub use types::{
    Domain, DomainInput, DomainQuery, ESTIMATE_NOTE, FinancialEstimate, FinancialInput,
    LegalInput, MedicalInput, ReasoningMode, ReasoningOutcome, RiskLevel, RuleOutcome,
};
