//! Pre-built Test Fixtures
//!
//! Provides ready-to-use red flags, bundles, and model responses. The flag
//! texts are chosen so that each one lands in a known severity tier.

use serde_json::{json, Value};

use domain_claims::{AnalysisBundle, AnalysisResult};

/// Fixture for red flag text with a known classification
pub struct FlagFixtures;

impl FlagFixtures {
    /// CRITICAL, Fraud & Misrepresentation
    pub fn critical() -> &'static str {
        "Fraud detected in claim"
    }

    /// CRITICAL, Title & Ownership Issues
    pub fn salvage_title() -> &'static str {
        "Salvage title found"
    }

    /// HIGH, Other Issues
    pub fn high() -> &'static str {
        "Odometer rollback suspected"
    }

    /// HIGH, Other Issues
    pub fn racing() -> &'static str {
        "Vehicle used for racing"
    }

    /// MEDIUM, Maintenance & Condition Issues
    pub fn medium() -> &'static str {
        "Normal wear and tear"
    }

    /// MEDIUM, Other Issues (matches no keyword)
    pub fn unmatched() -> &'static str {
        "Something odd about the paperwork"
    }

    /// `count` distinct MEDIUM flags
    pub fn mediums(count: usize) -> Vec<String> {
        (1..=count)
            .map(|i| format!("Minor damage noted on panel {}", i))
            .collect()
    }
}

/// Fixture for analysis bundles
pub struct BundleFixtures;

impl BundleFixtures {
    /// Five clean documents in canonical order
    pub fn clean_claim() -> AnalysisBundle {
        ["contract", "inspection", "acv", "history", "adjuster"]
            .into_iter()
            .fold(AnalysisBundle::new(), |bundle, tag| {
                bundle.with(tag, AnalysisResult::new())
            })
    }

    /// Single contract document carrying the given flags
    pub fn contract_with<I, S>(flags: I) -> AnalysisBundle
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnalysisBundle::new().with("contract", AnalysisResult::with_red_flags(flags))
    }

    /// Raw bundle as an upstream collaborator would send it
    pub fn raw_claim() -> Value {
        json!({
            "contract": {
                "red_flags": [],
                "key_findings": ["Comprehensive coverage", "Deductible $500"],
                "recommendations": []
            },
            "history": {
                "red_flags": [
                    {"issue": "Odometer rollback suspected", "severity": "HIGH", "impact": "Valuation"}
                ],
                "key_findings": ["Two previous owners"],
                "title_status": "clean"
            },
            "inspection": {
                "red_flags": ["Normal wear and tear"],
                "key_findings": ["Front bumper damage", "Tires worn", "Windshield chipped", "Paint faded"]
            }
        })
    }
}

/// Fixture for raw language-model responses
pub struct ResponseFixtures;

impl ResponseFixtures {
    /// A clean JSON response with no red flags
    pub fn clean() -> String {
        json!({
            "red_flags": [],
            "key_findings": ["No issues found"],
            "recommendations": ["Proceed with claim"]
        })
        .to_string()
    }

    /// A JSON response carrying the given red flags as structured objects
    pub fn with_flags(flags: &[&str]) -> String {
        let red_flags: Vec<Value> = flags
            .iter()
            .map(|issue| json!({"issue": issue, "severity": "HIGH", "impact": "Coverage impact"}))
            .collect();
        json!({
            "red_flags": red_flags,
            "key_findings": ["Review completed"],
            "recommendations": []
        })
        .to_string()
    }

    /// A JSON object wrapped in conversational prose
    pub fn wrapped_in_prose(flag: &str) -> String {
        format!(
            "Sure, here is the analysis you asked for:\n{}\nLet me know if you need anything else.",
            json!({"red_flags": [flag], "key_findings": [], "recommendations": []})
        )
    }

    /// Prose with no JSON at all
    pub fn prose_only() -> String {
        "The document appears to be in order.".to_string()
    }
}
