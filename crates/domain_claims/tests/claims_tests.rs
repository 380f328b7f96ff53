//! Comprehensive tests for domain_claims

use proptest::prelude::*;
use serde_json::json;

use core_kernel::DocumentTag;

use domain_claims::decision::RiskLevel;
use domain_claims::evaluator::calculate_risk_score;
use domain_claims::{
    AnalysisBundle, AnalysisResult, ClaimError, ConfidenceLevel, CoverageEvaluator,
    EvaluatorConfig, FlagCategory, FlagClassifier, Recommendation, Severity,
};
use test_utils::{
    assert_confidence, assert_error_decision, assert_recommendation, assert_risk_score,
    assert_sorted_by_severity, bundle_strategy, classified_flags_strategy, fraud_case_strategy,
    neutral_padding_strategy, AnalysisResultBuilder, BundleBuilder, BundleFixtures, FlagFixtures,
};

fn evaluator() -> CoverageEvaluator {
    CoverageEvaluator::new(EvaluatorConfig::default()).unwrap()
}

// ============================================================================
// Classifier Tests
// ============================================================================

mod classifier_tests {
    use super::*;

    fn classify(flag: &str) -> domain_claims::Classification {
        FlagClassifier::new().classify(flag, &DocumentTag::from("inspection"))
    }

    #[test]
    fn test_fraud_is_critical_fraud() {
        let result = classify("FRAUD suspected");
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.category, FlagCategory::FraudMisrepresentation);
    }

    #[test]
    fn test_high_keyword_without_critical() {
        assert_eq!(classify(FlagFixtures::high()).severity, Severity::High);
        assert_eq!(classify("Unreported damage to the frame").severity, Severity::High);
    }

    #[test]
    fn test_unmatched_flag_defaults() {
        let result = classify(FlagFixtures::unmatched());
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.category, FlagCategory::Other);
    }

    #[test]
    fn test_racing_keeps_category_decoupled() {
        let result = classify(FlagFixtures::racing());
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.category, FlagCategory::Other);
    }

    #[test]
    fn test_tables_are_exposed_in_match_order() {
        let classifier = FlagClassifier::new();
        let severities: Vec<Severity> =
            classifier.severity_rules().iter().map(|rule| rule.severity).collect();
        assert_eq!(severities, vec![Severity::Critical, Severity::High, Severity::Medium]);
        assert_eq!(classifier.category_rules()[0].category, FlagCategory::TitleOwnership);
    }

    proptest! {
        #[test]
        fn fraud_in_any_case_is_critical(
            word in fraud_case_strategy(),
            prefix in neutral_padding_strategy(),
            suffix in neutral_padding_strategy(),
        ) {
            let result = classify(&format!("{}{}{}", prefix, word, suffix));
            prop_assert_eq!(result.severity, Severity::Critical);
            prop_assert_eq!(result.category, FlagCategory::FraudMisrepresentation);
        }

        #[test]
        fn keywordless_text_is_medium_other(text in "[0-9 ]{0,20}") {
            let result = classify(&text);
            prop_assert_eq!(result.severity, Severity::Medium);
            prop_assert_eq!(result.category, FlagCategory::Other);
        }

        #[test]
        fn known_flags_classify_as_expected(flags in classified_flags_strategy(6)) {
            for (text, expected) in flags {
                prop_assert_eq!(classify(&text).severity, expected);
            }
        }
    }
}

// ============================================================================
// Decision Rule Tests
// ============================================================================

mod decision_tests {
    use super::*;

    #[test]
    fn test_empty_bundle() {
        let decision = evaluator().evaluate(&AnalysisBundle::new());
        assert_recommendation(&decision, Recommendation::Cover);
        assert_risk_score(&decision, 0.0);
        assert_confidence(&decision, ConfidenceLevel::Low);
    }

    #[test]
    fn test_one_critical_flag_denies() {
        let decision = evaluator().evaluate(&BundleFixtures::contract_with([FlagFixtures::critical()]));
        assert_recommendation(&decision, Recommendation::Deny);
        assert_risk_score(&decision, 40.0);
        assert!(decision.reasoning.contains("1 critical issue"));
    }

    #[test]
    fn test_two_high_flags_deny() {
        let bundle = BundleBuilder::new()
            .flagged("history", [FlagFixtures::high()])
            .flagged("inspection", [FlagFixtures::racing()])
            .build();
        let decision = evaluator().evaluate(&bundle);
        assert_recommendation(&decision, Recommendation::Deny);
        assert_risk_score(&decision, 50.0);
        assert!(decision.reasoning.starts_with("Multiple high-severity red flags"));
    }

    #[test]
    fn test_three_medium_flags_reach_threshold() {
        let decision = evaluator().evaluate(&BundleFixtures::contract_with(FlagFixtures::mediums(3)));
        assert_recommendation(&decision, Recommendation::Deny);
        assert_risk_score(&decision, 30.0);
        assert_eq!(
            decision.reasoning,
            "Excessive red flags: 3 issues identified (threshold: 3)"
        );
    }

    #[test]
    fn test_one_medium_flag_is_caution() {
        let decision = evaluator().evaluate(&BundleFixtures::contract_with([FlagFixtures::medium()]));
        assert_recommendation(&decision, Recommendation::CoverWithCaution);
        assert_risk_score(&decision, 10.0);
    }

    #[test]
    fn test_clean_claim_is_covered() {
        let decision = evaluator().evaluate(&BundleFixtures::clean_claim());
        assert_recommendation(&decision, Recommendation::Cover);
        assert_risk_score(&decision, 0.0);
        assert_confidence(&decision, ConfidenceLevel::High);
        assert!(decision.summary.contains("All 5 documents"));
        assert!(decision.coverage_details.required_actions.is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let evaluator = CoverageEvaluator::new(EvaluatorConfig::with_threshold(5)).unwrap();
        let decision = evaluator.evaluate(&BundleFixtures::contract_with(FlagFixtures::mediums(4)));
        assert_recommendation(&decision, Recommendation::CoverWithCaution);
        assert_risk_score(&decision, 40.0);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = CoverageEvaluator::new(EvaluatorConfig::with_threshold(0));
        assert!(matches!(result, Err(ClaimError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_failed_document_contributes_no_flags() {
        let bundle = BundleBuilder::new()
            .clean("contract")
            .document(
                "history",
                AnalysisResultBuilder::new()
                    .with_flag(FlagFixtures::critical())
                    .failed("Failed to analyze history document")
                    .build(),
            )
            .build();
        let decision = evaluator().evaluate(&bundle);

        assert_recommendation(&decision, Recommendation::Cover);
        assert_risk_score(&decision, 0.0);
        assert_confidence(&decision, ConfidenceLevel::Low);
        assert!(decision.red_flags.is_empty());

        let details = &decision.coverage_details;
        let history = details
            .document_analysis
            .iter()
            .find(|summary| summary.document == "history")
            .unwrap();
        assert_eq!(history.red_flags_count, 0);
        assert_eq!(history.error.as_deref(), Some("Failed to analyze history document"));
        assert_eq!(details.risk_assessment.unwrap().red_flags_count, 0);
    }
}

// ============================================================================
// Risk Score and Ordering Tests
// ============================================================================

mod scoring_tests {
    use super::*;

    #[test]
    fn test_ten_critical_flags_cap_at_100() {
        let flags = vec![FlagFixtures::critical(); 10];
        let decision = evaluator().evaluate(&BundleFixtures::contract_with(flags));
        assert_risk_score(&decision, 100.0);
    }

    #[test]
    fn test_sort_is_stable_across_documents() {
        let bundle = BundleBuilder::new()
            .flagged("inspection", [FlagFixtures::medium()])
            .flagged("contract", ["Fraud in application"])
            .flagged("history", [FlagFixtures::high(), "Stolen vehicle report"])
            .build();
        let decision = evaluator().evaluate(&bundle);

        assert_sorted_by_severity(&decision);
        let order: Vec<&str> = decision.red_flags.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Fraud in application",
                "Stolen vehicle report",
                FlagFixtures::high(),
                FlagFixtures::medium(),
            ]
        );
    }

    proptest! {
        #[test]
        fn risk_score_is_monotonic(flags in classified_flags_strategy(15)) {
            let texts: Vec<String> = flags.into_iter().map(|(text, _)| text).collect();
            let evaluator = evaluator();
            let mut previous = 0.0;
            for end in 0..=texts.len() {
                let decision = evaluator.evaluate(&BundleFixtures::contract_with(texts[..end].to_vec()));
                prop_assert!(decision.risk_score >= previous);
                prop_assert!(decision.risk_score <= 100.0);
                previous = decision.risk_score;
            }
        }

        #[test]
        fn evaluation_is_sorted_and_bounded(bundle in bundle_strategy()) {
            let decision = evaluator().evaluate(&bundle);
            for pair in decision.red_flags.windows(2) {
                prop_assert!(pair[0].severity.rank() >= pair[1].severity.rank());
            }
            prop_assert_eq!(decision.risk_score, calculate_risk_score(&decision.red_flags));
            prop_assert_ne!(decision.recommendation, Recommendation::Error);
        }
    }
}

// ============================================================================
// Confidence Tests
// ============================================================================

mod confidence_tests {
    use super::*;

    fn five_documents(failed: usize) -> AnalysisBundle {
        ["contract", "inspection", "acv", "history", "adjuster"]
            .into_iter()
            .enumerate()
            .fold(BundleBuilder::new(), |builder, (index, tag)| {
                if index < failed {
                    builder.failed(tag)
                } else {
                    builder.clean(tag)
                }
            })
            .build()
    }

    #[test]
    fn test_confidence_tiers() {
        let evaluator = evaluator();
        assert_confidence(&evaluator.evaluate(&five_documents(0)), ConfidenceLevel::High);
        assert_confidence(&evaluator.evaluate(&five_documents(1)), ConfidenceLevel::Medium);
        assert_confidence(&evaluator.evaluate(&five_documents(2)), ConfidenceLevel::Low);
        assert_confidence(&evaluator.evaluate(&five_documents(5)), ConfidenceLevel::Low);
    }

    #[test]
    fn test_two_documents_one_failed_is_low() {
        let bundle = BundleBuilder::new().clean("contract").failed("history").build();
        assert_confidence(&evaluator().evaluate(&bundle), ConfidenceLevel::Low);
    }
}

// ============================================================================
// Coverage Details Tests
// ============================================================================

mod details_tests {
    use super::*;

    #[test]
    fn test_limitations_only_for_critical_and_high() {
        let bundle = BundleFixtures::contract_with([
            FlagFixtures::salvage_title(),
            FlagFixtures::high(),
            FlagFixtures::medium(),
        ]);
        let details = evaluator().evaluate(&bundle).coverage_details;

        assert_eq!(details.coverage_limitations.len(), 2);
        assert_eq!(
            details.coverage_limitations[0].impact,
            "May limit or exclude coverage for title & ownership issues"
        );
        assert_eq!(
            details.coverage_limitations[1].impact,
            "May limit or exclude coverage for other issues"
        );
        assert_eq!(details.required_actions.len(), 2);
    }

    #[test]
    fn test_risk_assessment_follows_worst_flag() {
        let bundle = BundleFixtures::contract_with([FlagFixtures::high()]);
        let risk = evaluator().evaluate(&bundle).coverage_details.risk_assessment.unwrap();
        assert_eq!(risk.overall_risk, RiskLevel::High);
        assert_eq!(risk.red_flags_count, 1);
        assert_eq!(risk.high_risk_issues, 1);
        assert_eq!(risk.critical_issues, 0);
    }

    #[test]
    fn test_document_summary_truncates_findings() {
        let decision = evaluator().evaluate_raw(&BundleFixtures::raw_claim());
        let summaries = &decision.coverage_details.document_analysis;

        assert_eq!(summaries.len(), 3);
        let inspection = summaries.iter().find(|s| s.document == "inspection").unwrap();
        assert_eq!(inspection.key_findings.len(), 3);
        assert_eq!(inspection.red_flags_count, 1);
    }

    #[test]
    fn test_findings_and_details_do_not_change_the_decision() {
        let inspection = AnalysisResultBuilder::new()
            .with_flag(FlagFixtures::medium())
            .with_finding("Front bumper replaced")
            .with_finding("Frame straight")
            .with_finding("Tires worn")
            .with_finding("Interior clean")
            .with_recommendation("Request repair invoices")
            .with_detail("overall_condition", json!("fair"))
            .build();
        assert_eq!(inspection.details["overall_condition"], json!("fair"));
        assert_eq!(inspection.recommendations, vec!["Request repair invoices"]);

        let bundle = BundleBuilder::new()
            .clean("contract")
            .document("inspection", inspection)
            .build();
        let decision = evaluator().evaluate(&bundle);

        assert_recommendation(&decision, Recommendation::CoverWithCaution);
        assert_risk_score(&decision, 10.0);
        let summary = decision
            .coverage_details
            .document_analysis
            .iter()
            .find(|s| s.document == "inspection")
            .unwrap();
        assert_eq!(
            summary.key_findings,
            vec!["Front bumper replaced", "Frame straight", "Tires worn"]
        );
        assert_eq!(summary.red_flags_count, 1);
    }

    #[test]
    fn test_flags_carry_source_and_reference() {
        let decision = evaluator().evaluate_raw(&BundleFixtures::raw_claim());
        let odometer = decision
            .red_flags
            .iter()
            .find(|flag| flag.description == FlagFixtures::high())
            .unwrap();
        assert_eq!(odometer.document, "history");
        assert_eq!(
            odometer.contract_reference,
            "Refer to contract exclusions and limitations section"
        );
    }
}

// ============================================================================
// Raw Input Tests
// ============================================================================

mod raw_input_tests {
    use super::*;

    #[test]
    fn test_non_mapping_bundle_is_error() {
        let evaluator = evaluator();
        assert_error_decision(&evaluator.evaluate_raw(&json!(["contract"])));
        assert_error_decision(&evaluator.evaluate_raw(&json!("contract")));
        assert_error_decision(&evaluator.evaluate_raw(&json!(null)));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let raw = json!({"contract": {"red_flags": "not a list"}});
        assert_error_decision(&evaluator().evaluate_raw(&raw));
    }

    #[test]
    fn test_structured_flags_classified_by_issue() {
        let raw = json!({
            "history": {"red_flags": [{"issue": "Salvage title found", "severity": "LOW"}]}
        });
        let decision = evaluator().evaluate_raw(&raw);
        assert_recommendation(&decision, Recommendation::Deny);
        assert_eq!(decision.red_flags[0].severity, Severity::Critical);
    }

    #[test]
    fn test_decision_serializes_with_wire_spellings() {
        let decision = evaluator().evaluate_raw(&BundleFixtures::raw_claim());
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["recommendation"], "COVER_WITH_CAUTION");
        assert_eq!(json["red_flags"][0]["severity"], "HIGH");
        assert_eq!(json["confidence_level"], "HIGH");
    }

    #[test]
    fn test_typed_and_raw_paths_agree() {
        let raw = BundleFixtures::raw_claim();
        let bundle = AnalysisBundle::from_value(&raw).unwrap();
        let evaluator = evaluator();
        assert_eq!(evaluator.evaluate(&bundle), evaluator.evaluate_raw(&raw));
    }

    #[test]
    fn test_result_from_value_defaults() {
        let result = AnalysisResult::from_value(&json!({"red_flags": null})).unwrap();
        assert!(result.red_flags.is_empty());
    }
}
