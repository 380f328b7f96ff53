//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating red flags and analysis
//! bundles with a known classification.

use proptest::prelude::*;

use domain_claims::{AnalysisBundle, AnalysisResult, Severity};

/// Strategy for a red flag text together with the severity it must classify as
pub fn classified_flag_strategy() -> impl Strategy<Value = (String, Severity)> {
    prop_oneof![
        prop_oneof![
            Just("Fraud detected in claim"),
            Just("Stolen vehicle report on file"),
            Just("Rebuilt title disclosed"),
            Just("Material misrepresentation of use"),
        ]
        .prop_map(|text| (text.to_string(), Severity::Critical)),
        prop_oneof![
            Just("Odometer rollback suspected"),
            Just("Previous total loss recorded"),
            Just("Unreported damage to frame"),
            Just("Aftermarket modification installed"),
        ]
        .prop_map(|text| (text.to_string(), Severity::High)),
        prop_oneof![
            Just("Normal wear and tear"),
            Just("Delayed reporting of incident"),
            Just("Pre-existing condition on bumper"),
            Just("Paperwork signed late"),
        ]
        .prop_map(|text| (text.to_string(), Severity::Medium)),
    ]
}

/// Strategy for the word "fraud" in random letter case
pub fn fraud_case_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), 5).prop_map(|upper| {
        "fraud"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect::<String>()
    })
}

/// Strategy for padding that can never contain a keyword
pub fn neutral_padding_strategy() -> impl Strategy<Value = String> {
    "[0-9 ]{0,12}"
}

/// Strategy for a list of classified flags
pub fn classified_flags_strategy(max: usize) -> impl Strategy<Value = Vec<(String, Severity)>> {
    proptest::collection::vec(classified_flag_strategy(), 0..=max)
}

/// Strategy for a bundle of up to five documents, some possibly failed
pub fn bundle_strategy() -> impl Strategy<Value = AnalysisBundle> {
    proptest::collection::vec(
        (proptest::collection::vec(classified_flag_strategy(), 0..4), any::<bool>()),
        0..=5,
    )
    .prop_map(|documents| {
        documents
            .into_iter()
            .enumerate()
            .fold(AnalysisBundle::new(), |bundle, (index, (flags, failed))| {
                let mut result =
                    AnalysisResult::with_red_flags(flags.into_iter().map(|(text, _)| text));
                if failed {
                    result.error = Some("Failed to analyze document".to_string());
                }
                bundle.with(format!("doc{}", index), result)
            })
    })
}
