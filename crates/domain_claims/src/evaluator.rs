//! Coverage evaluation
//!
//! The [`CoverageEvaluator`] collects every red flag in a bundle, classifies
//! and ranks them, and applies the decision policy:
//!
//! 1. any CRITICAL flag denies coverage
//! 2. two or more HIGH flags deny coverage
//! 3. a total at or above the configured threshold denies coverage
//! 4. any remaining flag means cover with caution
//! 5. no flags means cover
//!
//! The evaluator holds only read-only configuration, so one instance can be
//! shared across threads and called concurrently.

use serde_json::Value;
use std::cmp::Reverse;

use crate::analysis::AnalysisBundle;
use crate::classifier::{FlagClassifier, Severity};
use crate::config::EvaluatorConfig;
use crate::decision::{ClassifiedFlag, ConfidenceLevel, CoverageDecision, Recommendation};
use crate::error::ClaimError;
use crate::report;

/// Advisory contract reference attached to every flag
pub const CONTRACT_REFERENCE: &str = "Refer to contract exclusions and limitations section";

/// Upper bound of the risk score
pub const MAX_RISK_SCORE: f64 = 100.0;

/// Share of analyzed documents at which partial failure still rates MEDIUM
pub const MEDIUM_CONFIDENCE_RATIO: f64 = 0.8;

/// The decision rule that fired, with the counts it was based on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionBasis {
    CriticalFlags { critical: usize },
    MultipleHighFlags { high: usize },
    ThresholdReached { total: usize, threshold: usize },
    MinorFlags { total: usize },
    NoFlags,
}

impl DecisionBasis {
    pub fn recommendation(&self) -> Recommendation {
        match self {
            DecisionBasis::CriticalFlags { .. }
            | DecisionBasis::MultipleHighFlags { .. }
            | DecisionBasis::ThresholdReached { .. } => Recommendation::Deny,
            DecisionBasis::MinorFlags { .. } => Recommendation::CoverWithCaution,
            DecisionBasis::NoFlags => Recommendation::Cover,
        }
    }
}

/// Flag counts per severity tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
}

impl SeverityCounts {
    pub fn tally(flags: &[ClassifiedFlag]) -> Self {
        flags.iter().fold(Self::default(), |mut counts, flag| {
            match flag.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium
    }

    /// Most severe tier present, if any flag exists
    pub fn highest(&self) -> Option<Severity> {
        if self.critical > 0 {
            Some(Severity::Critical)
        } else if self.high > 0 {
            Some(Severity::High)
        } else if self.medium > 0 {
            Some(Severity::Medium)
        } else {
            None
        }
    }
}

/// Rule-based aggregator from per-document analyses to a coverage decision
#[derive(Debug, Clone)]
pub struct CoverageEvaluator {
    config: EvaluatorConfig,
    classifier: FlagClassifier,
}

impl CoverageEvaluator {
    /// Creates an evaluator using the standard classifier
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidConfiguration` if the configuration is invalid
    pub fn new(config: EvaluatorConfig) -> Result<Self, ClaimError> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: FlagClassifier::new(),
        })
    }

    /// Replaces the flag classifier
    pub fn with_classifier(mut self, classifier: FlagClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn classifier(&self) -> &FlagClassifier {
        &self.classifier
    }

    /// Evaluates a validated bundle
    pub fn evaluate(&self, bundle: &AnalysisBundle) -> CoverageDecision {
        let mut flags = self.collect_flags(bundle);
        rank_flags(&mut flags);

        let counts = SeverityCounts::tally(&flags);
        let basis = self.decide(&counts);
        let risk_score = calculate_risk_score(&flags);
        let confidence_level = calculate_confidence_level(bundle);
        let coverage_details = report::coverage_details(bundle, &flags, &counts);

        tracing::info!(
            recommendation = %basis.recommendation(),
            risk_score,
            confidence = %confidence_level,
            documents = bundle.len(),
            red_flags = counts.total(),
            critical = counts.critical,
            high = counts.high,
            "Coverage evaluated"
        );

        CoverageDecision {
            recommendation: basis.recommendation(),
            summary: report::summary(&basis, bundle.len()),
            reasoning: report::reasoning(&basis),
            red_flags: flags,
            coverage_details,
            risk_score,
            confidence_level,
        }
    }

    /// Evaluates raw, unvalidated input
    ///
    /// Never fails: input that cannot be read as a bundle produces the
    /// `ERROR` decision.
    pub fn evaluate_raw(&self, raw: &Value) -> CoverageDecision {
        match AnalysisBundle::from_value(raw) {
            Ok(bundle) => self.evaluate(&bundle),
            Err(e) => {
                tracing::error!(error = %e, "Error evaluating coverage");
                CoverageDecision::error()
            }
        }
    }

    /// Classifies every red flag in bundle order, then flag order
    ///
    /// Documents with an error marker contribute no flags; they only lower
    /// the confidence level.
    pub fn collect_flags(&self, bundle: &AnalysisBundle) -> Vec<ClassifiedFlag> {
        bundle
            .iter()
            .filter(|(_, result)| !result.is_failed())
            .flat_map(|(tag, result)| {
                result.red_flags.iter().map(move |flag| {
                    let classification = self.classifier.classify(flag, tag);
                    ClassifiedFlag {
                        category: classification.category,
                        description: flag.clone(),
                        severity: classification.severity,
                        document: tag.clone(),
                        contract_reference: CONTRACT_REFERENCE.to_string(),
                    }
                })
            })
            .collect()
    }

    /// Applies the decision policy; the first matching rule wins
    pub fn decide(&self, counts: &SeverityCounts) -> DecisionBasis {
        let total = counts.total();
        let threshold = self.config.red_flag_threshold;

        if counts.critical > 0 {
            DecisionBasis::CriticalFlags {
                critical: counts.critical,
            }
        } else if counts.high >= 2 {
            DecisionBasis::MultipleHighFlags { high: counts.high }
        } else if total >= threshold {
            DecisionBasis::ThresholdReached { total, threshold }
        } else if total > 0 {
            DecisionBasis::MinorFlags { total }
        } else {
            DecisionBasis::NoFlags
        }
    }
}

/// Sorts flags most severe first, keeping collection order among equals
pub fn rank_flags(flags: &mut [ClassifiedFlag]) {
    // sort_by_key is stable
    flags.sort_by_key(|flag| Reverse(flag.severity.rank()));
}

/// Additive risk score, capped at [`MAX_RISK_SCORE`]
pub fn calculate_risk_score(flags: &[ClassifiedFlag]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }

    let score: f64 = flags.iter().map(|flag| flag.severity.risk_weight()).sum();
    score.min(MAX_RISK_SCORE)
}

/// Confidence in how completely the bundle was analyzed upstream
pub fn calculate_confidence_level(bundle: &AnalysisBundle) -> ConfidenceLevel {
    let total = bundle.len();
    let analyzed = bundle.analyzed_count();

    if analyzed == 0 {
        ConfidenceLevel::Low
    } else if analyzed == total {
        ConfidenceLevel::High
    } else if analyzed as f64 >= total as f64 * MEDIUM_CONFIDENCE_RATIO {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
