//! Coverage decision types

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::DocumentTag;

use crate::classifier::{FlagCategory, Severity};

/// Coverage recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// No red flags, cover the claim
    Cover,
    /// Minor red flags, cover after additional review
    CoverWithCaution,
    /// Critical, multiple high, or too many red flags
    Deny,
    /// The evaluation itself failed; manual review required
    Error,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Cover => "COVER",
            Recommendation::CoverWithCaution => "COVER_WITH_CAUTION",
            Recommendation::Deny => "DENY",
            Recommendation::Error => "ERROR",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How completely the input documents were analyzed upstream
///
/// This says nothing about whether the decision is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
        })
    }
}

/// Overall risk label, mirroring the most severe flag present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl From<Severity> for RiskLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => RiskLevel::Critical,
            Severity::High => RiskLevel::High,
            Severity::Medium => RiskLevel::Medium,
        }
    }
}

/// A red flag after classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFlag {
    /// Topical category
    pub category: FlagCategory,
    /// Original flag text, unmodified
    pub description: String,
    /// Severity tier
    pub severity: Severity,
    /// Tag of the document that raised the flag
    pub document: DocumentTag,
    /// Advisory pointer into the contract
    pub contract_reference: String,
}

/// Processing status of a document in the coverage details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// The document reached the evaluator
    Analyzed,
}

/// Per-document entry of the coverage details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysisSummary {
    pub document: DocumentTag,
    pub status: DocumentStatus,
    /// Number of red flags the document reported
    pub red_flags_count: usize,
    /// Up to the first three key findings
    pub key_findings: Vec<String>,
    /// Upstream error marker, if the document failed analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Risk tallies over all classified flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub red_flags_count: usize,
    pub critical_issues: usize,
    pub high_risk_issues: usize,
}

/// A CRITICAL or HIGH flag and how it may restrict coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLimitation {
    pub issue: String,
    pub impact: String,
}

/// Structured breakdown for human review
///
/// Empty (the `Default`) on an `ERROR` decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageDetails {
    pub document_analysis: Vec<DocumentAnalysisSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
    pub coverage_limitations: Vec<CoverageLimitation>,
    pub required_actions: Vec<String>,
}

/// The evaluator's output for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageDecision {
    pub recommendation: Recommendation,
    /// Human-readable summary of the decision path
    pub summary: String,
    /// Short justification naming the rule that fired
    pub reasoning: String,
    /// Classified flags, most severe first
    pub red_flags: Vec<ClassifiedFlag>,
    pub coverage_details: CoverageDetails,
    /// Additive risk score in [0, 100]
    pub risk_score: f64,
    pub confidence_level: ConfidenceLevel,
}

impl CoverageDecision {
    /// Summary used when the evaluation could not be completed
    pub const ERROR_SUMMARY: &'static str = "Unable to evaluate coverage due to processing errors";
    /// Reasoning used when the evaluation could not be completed
    pub const ERROR_REASONING: &'static str = "Analysis failed - manual review required";

    /// Decision returned when the evaluation pipeline itself failed
    ///
    /// Same shape as any other decision so callers can render it uniformly.
    pub fn error() -> Self {
        Self {
            recommendation: Recommendation::Error,
            summary: Self::ERROR_SUMMARY.to_string(),
            reasoning: Self::ERROR_REASONING.to_string(),
            red_flags: Vec::new(),
            coverage_details: CoverageDetails::default(),
            risk_score: 0.0,
            confidence_level: ConfidenceLevel::Low,
        }
    }

    /// Returns true if this is the failed-evaluation decision
    pub fn is_error(&self) -> bool {
        self.recommendation == Recommendation::Error
    }

    /// Number of flags of the given severity
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.red_flags
            .iter()
            .filter(|flag| flag.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_decision_shape() {
        let decision = CoverageDecision::error();
        assert!(decision.is_error());
        assert_eq!(decision.risk_score, 0.0);
        assert_eq!(decision.confidence_level, ConfidenceLevel::Low);
        assert!(decision.red_flags.is_empty());
        assert_eq!(decision.coverage_details, CoverageDetails::default());
    }

    #[test]
    fn test_recommendation_spelling() {
        let json = serde_json::to_string(&Recommendation::CoverWithCaution).unwrap();
        assert_eq!(json, "\"COVER_WITH_CAUTION\"");
        assert_eq!(Recommendation::Deny.to_string(), "DENY");
    }

    #[test]
    fn test_risk_level_mirrors_severity() {
        assert_eq!(RiskLevel::from(Severity::High), RiskLevel::High);
    }

    #[test]
    fn test_document_status_spelling() {
        assert_eq!(serde_json::to_string(&DocumentStatus::Analyzed).unwrap(), "\"analyzed\"");
    }
}
