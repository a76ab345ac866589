//! Financial investment rules
//!
//! Deduction needs both `expectedReturn` and `riskLevel`. Induction
//! derives missing values from `pastReturns` (mean and population
//! standard deviation) and re-runs deduction on the derived values.

use crate::types::{ESTIMATE_NOTE, FinancialEstimate, FinancialInput, RiskLevel, RuleOutcome};

pub(crate) fn deduce(input: &FinancialInput) -> Option<String> {
    let expected = input.expected_return?;
    let risk = input.risk_level?;

    Some(if expected > 0.05 && risk == RiskLevel::Low {
        "Decision: Invest (high return, low risk)".to_string()
    } else if expected < 0.0 || risk == RiskLevel::High {
        "Decision: Do Not Invest (insufficient return or high risk)".to_string()
    } else {
        "Decision: Hold (moderate return/risk)".to_string()
    })
}

pub(crate) fn induce(input: &FinancialInput) -> RuleOutcome {
    let mut expected = input.expected_return;
    let mut risk = input.risk_level;

    if let Some(returns) = input.past_returns.as_deref() {
        if expected.is_none() && !returns.is_empty() {
            expected = Some(mean(returns));
        }
        if risk.is_none() && returns.len() > 1 {
            let center = expected.unwrap_or_else(|| mean(returns));
            risk = Some(classify_risk(population_std_dev(returns, center)));
        }
    }

    if expected.is_some() && risk.is_some() {
        let derived = FinancialInput {
            expected_return: expected,
            risk_level: risk,
            past_returns: None,
        };
        if let Some(decision) = deduce(&derived) {
            return RuleOutcome::Text(decision);
        }
    }

    RuleOutcome::Estimate(FinancialEstimate {
        estimated_return: expected,
        estimated_risk: risk,
        note: ESTIMATE_NOTE.to_string(),
    })
}

fn classify_risk(std_dev: f64) -> RiskLevel {
    if std_dev > 0.10 {
        RiskLevel::High
    } else if std_dev < 0.05 {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: sum of squared deviations over N, not N-1.
pub(crate) fn population_std_dev(values: &[f64], center: f64) -> f64 {
    let variance =
        values.iter().map(|v| (v - center).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invest_on_high_return_low_risk() {
        let input = FinancialInput {
            expected_return: Some(0.06),
            risk_level: Some(RiskLevel::Low),
            past_returns: None,
        };
        let decision = deduce(&input).unwrap();
        assert!(decision.contains("Invest"));
        assert!(!decision.contains("Do Not Invest"));
    }

    #[test]
    fn do_not_invest_on_negative_return_or_high_risk() {
        let negative = FinancialInput {
            expected_return: Some(-0.01),
            risk_level: Some(RiskLevel::Low),
            past_returns: None,
        };
        assert!(deduce(&negative).unwrap().contains("Do Not Invest"));

        let risky = FinancialInput {
            expected_return: Some(0.2),
            risk_level: Some(RiskLevel::High),
            past_returns: None,
        };
        assert!(deduce(&risky).unwrap().contains("Do Not Invest"));
    }

    #[test]
    fn hold_otherwise() {
        let input = FinancialInput {
            expected_return: Some(0.03),
            risk_level: Some(RiskLevel::Medium),
            past_returns: None,
        };
        assert!(deduce(&input).unwrap().contains("Hold"));
    }

    #[test]
    fn missing_inputs_yield_no_conclusion() {
        let input = FinancialInput {
            expected_return: Some(0.06),
            risk_level: None,
            past_returns: None,
        };
        assert_eq!(deduce(&input), None);
    }

    #[test]
    fn derivation_uses_mean_and_population_std_dev() {
        let returns = [0.05, 0.06, 0.07, 0.04, 0.05];
        let m = mean(&returns);
        assert!((m - 0.054).abs() < 1e-12);

        let sd = population_std_dev(&returns, m);
        assert!((sd - 0.010198).abs() < 1e-5);
        assert_eq!(classify_risk(sd), RiskLevel::Low);
    }

    #[test]
    fn derived_values_re_run_deduction() {
        // Mean 0.054 > 0.05 with low risk: the derived values trigger
        // the Invest rule rather than an estimate.
        let input = FinancialInput {
            expected_return: None,
            risk_level: None,
            past_returns: Some(vec![0.05, 0.06, 0.07, 0.04, 0.05]),
        };
        let RuleOutcome::Text(decision) = induce(&input) else {
            panic!("expected a derived decision");
        };
        assert!(decision.contains("Invest"));
    }

    #[test]
    fn volatile_history_is_high_risk() {
        let input = FinancialInput {
            expected_return: None,
            risk_level: None,
            past_returns: Some(vec![0.30, -0.20, 0.25, -0.15]),
        };
        let RuleOutcome::Text(decision) = induce(&input) else {
            panic!("expected a derived decision");
        };
        assert!(decision.contains("Do Not Invest"));
    }

    #[test]
    fn single_sample_leaves_risk_unknown_and_estimates() {
        // One data point derives a return but no deviation, so no
        // deductive re-run is possible.
        let input = FinancialInput {
            expected_return: None,
            risk_level: None,
            past_returns: Some(vec![0.054]),
        };
        let RuleOutcome::Estimate(estimate) = induce(&input) else {
            panic!("expected an estimate");
        };
        assert_eq!(estimate.estimated_return, Some(0.054));
        assert_eq!(estimate.estimated_risk, None);
        assert_eq!(estimate.note, ESTIMATE_NOTE);
    }

    #[test]
    fn no_history_estimates_with_unknowns() {
        let RuleOutcome::Estimate(estimate) = induce(&FinancialInput::default()) else {
            panic!("expected an estimate");
        };
        assert_eq!(estimate.estimated_return, None);
        assert_eq!(estimate.estimated_risk, None);
    }
}
