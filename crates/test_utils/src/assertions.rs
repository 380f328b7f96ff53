//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for coverage decisions that give
//! more meaningful error messages than standard assertions.

use domain_claims::{CoverageDecision, ConfidenceLevel, Recommendation};

/// Asserts the recommendation of a decision
pub fn assert_recommendation(decision: &CoverageDecision, expected: Recommendation) {
    assert_eq!(
        decision.recommendation, expected,
        "Expected {}, got {} (reasoning: {})",
        expected, decision.recommendation, decision.reasoning
    );
}

/// Asserts the risk score of a decision within floating point tolerance
pub fn assert_risk_score(decision: &CoverageDecision, expected: f64) {
    assert!(
        (decision.risk_score - expected).abs() < 1e-9,
        "Expected risk score {}, got {}",
        expected,
        decision.risk_score
    );
}

/// Asserts the confidence level of a decision
pub fn assert_confidence(decision: &CoverageDecision, expected: ConfidenceLevel) {
    assert_eq!(
        decision.confidence_level, expected,
        "Expected confidence {}, got {}",
        expected, decision.confidence_level
    );
}

/// Asserts that flags are ordered most severe first
///
/// # Panics
///
/// Panics if a flag ranks higher than the one before it
pub fn assert_sorted_by_severity(decision: &CoverageDecision) {
    for pair in decision.red_flags.windows(2) {
        assert!(
            pair[0].severity.rank() >= pair[1].severity.rank(),
            "Flag '{}' ({}) is ordered before '{}' ({})",
            pair[0].description,
            pair[0].severity,
            pair[1].description,
            pair[1].severity
        );
    }
}

/// Asserts that a decision is the failed-evaluation decision
pub fn assert_error_decision(decision: &CoverageDecision) {
    assert_recommendation(decision, Recommendation::Error);
    assert_eq!(decision.summary, CoverageDecision::ERROR_SUMMARY);
    assert_eq!(decision.reasoning, CoverageDecision::ERROR_REASONING);
    assert!(decision.red_flags.is_empty(), "ERROR decision carries flags");
    assert_risk_score(decision, 0.0);
    assert_confidence(decision, ConfidenceLevel::Low);
}
