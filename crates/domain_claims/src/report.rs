//! Decision report assembly
//!
//! Builds the human-facing parts of a [`CoverageDecision`](crate::CoverageDecision):
//! coverage details, summary, and reasoning text.

use crate::analysis::AnalysisBundle;
use crate::classifier::{FlagCategory, Severity};
use crate::decision::{
    ClassifiedFlag, CoverageDetails, CoverageLimitation, DocumentAnalysisSummary, DocumentStatus,
    RiskAssessment, RiskLevel,
};
use crate::evaluator::{DecisionBasis, SeverityCounts};

/// Number of key findings kept per document
pub const KEY_FINDINGS_LIMIT: usize = 3;

/// Actions emitted whenever at least one red flag exists
pub const REQUIRED_ACTIONS: [&str; 2] = [
    "Review all identified red flags before processing claim",
    "Consider additional investigation for high-risk issues",
];

/// Builds the coverage details breakdown
///
/// The overall risk label follows the most severe flag and is computed
/// independently of the recommendation, so the two may disagree.
pub fn coverage_details(
    bundle: &AnalysisBundle,
    flags: &[ClassifiedFlag],
    counts: &SeverityCounts,
) -> CoverageDetails {
    let document_analysis = bundle
        .iter()
        .map(|(tag, result)| DocumentAnalysisSummary {
            document: tag.clone(),
            status: DocumentStatus::Analyzed,
            // failed documents contribute no flags
            red_flags_count: if result.is_failed() {
                0
            } else {
                result.red_flags.len()
            },
            key_findings: result
                .key_findings
                .iter()
                .take(KEY_FINDINGS_LIMIT)
                .cloned()
                .collect(),
            error: result.error.clone(),
        })
        .collect();

    let risk_assessment = RiskAssessment {
        overall_risk: counts
            .highest()
            .map(RiskLevel::from)
            .unwrap_or(RiskLevel::Low),
        red_flags_count: flags.len(),
        critical_issues: counts.critical,
        high_risk_issues: counts.high,
    };

    let coverage_limitations = flags
        .iter()
        .filter(|flag| matches!(flag.severity, Severity::Critical | Severity::High))
        .map(|flag| CoverageLimitation {
            issue: flag.description.clone(),
            impact: limitation_impact(flag.category),
        })
        .collect();

    let required_actions = if flags.is_empty() {
        Vec::new()
    } else {
        REQUIRED_ACTIONS.iter().map(|action| action.to_string()).collect()
    };

    CoverageDetails {
        document_analysis,
        risk_assessment: Some(risk_assessment),
        coverage_limitations,
        required_actions,
    }
}

/// Impact sentence for a coverage limitation
pub fn limitation_impact(category: FlagCategory) -> String {
    format!(
        "May limit or exclude coverage for {}",
        category.label().to_lowercase()
    )
}

/// Human-readable summary for the rule that fired
pub fn summary(basis: &DecisionBasis, document_count: usize) -> String {
    match basis {
        DecisionBasis::NoFlags => format!(
            "Coverage Recommended: No significant red flags identified. All {} documents analyzed successfully.",
            document_count
        ),
        DecisionBasis::MinorFlags { total } => format!(
            "Coverage Recommended with Caution: {} minor issues identified but none critical. Proceed with additional review.",
            total
        ),
        DecisionBasis::CriticalFlags { critical } => format!(
            "Coverage Denied: {} critical red flag(s) identified that violate policy terms.",
            critical
        ),
        DecisionBasis::MultipleHighFlags { high } => format!(
            "Coverage Denied: Multiple high-risk issues ({}) indicate policy violations.",
            high
        ),
        DecisionBasis::ThresholdReached { total, .. } => format!(
            "Coverage Denied: {} red flags exceed acceptable risk threshold.",
            total
        ),
    }
}

/// Short justification for the rule that fired
pub fn reasoning(basis: &DecisionBasis) -> String {
    match basis {
        DecisionBasis::CriticalFlags { critical } => format!(
            "Critical red flags identified: {} critical issue(s) found",
            critical
        ),
        DecisionBasis::MultipleHighFlags { high } => format!(
            "Multiple high-severity red flags: {} high-risk issues found",
            high
        ),
        DecisionBasis::ThresholdReached { total, threshold } => format!(
            "Excessive red flags: {} issues identified (threshold: {})",
            total, threshold
        ),
        DecisionBasis::MinorFlags { total } => format!(
            "Coverage recommended with caution: {} minor issues noted",
            total
        ),
        DecisionBasis::NoFlags => "No red flags identified - coverage recommended".to_string(),
    }
}
