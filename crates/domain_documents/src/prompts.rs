//! Prompt catalog for document analysis
//!
//! Each document kind gets an expert persona and a JSON response schema. All
//! schemas share `red_flags`, `key_findings`, and `recommendations`, which is
//! what the coverage evaluator consumes; the remaining fields are carried
//! through to the report as document details.

use crate::config::AnalyzerConfig;
use crate::kind::DocumentKind;

const RED_FLAG_SCHEMA: &str = r#"    "red_flags": [
        {
            "issue": "description of the issue",
            "severity": "LOW|MEDIUM|HIGH|CRITICAL",
            "impact": "how this affects coverage"
        }
    ],
    "key_findings": ["list of important findings"],
    "recommendations": ["list of recommendations"]"#;

/// Prompt material for one model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPrompt {
    pub system: String,
    pub user_preamble: &'static str,
    pub max_tokens: u32,
}

impl DocumentPrompt {
    /// Builds the user message for the extracted document text
    pub fn user_message(&self, content: &str) -> String {
        format!("{}\n\n{}", self.user_preamble, content)
    }
}

/// Returns the prompt for a document kind
pub fn prompt_for(kind: DocumentKind, config: &AnalyzerConfig) -> DocumentPrompt {
    let max_tokens = match kind {
        DocumentKind::Contract => config.contract_max_tokens,
        _ => config.document_max_tokens,
    };

    DocumentPrompt {
        system: system_prompt(kind),
        user_preamble: user_preamble(kind),
        max_tokens,
    }
}

fn user_preamble(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Contract => "Analyze this insurance contract:",
        DocumentKind::Inspection => "Analyze this inspection report:",
        DocumentKind::Acv => "Analyze this ACV document:",
        DocumentKind::History => "Analyze this vehicle history:",
        DocumentKind::Adjuster => "Analyze this adjuster assessment:",
    }
}

fn system_prompt(kind: DocumentKind) -> String {
    let (persona, focus, fields) = match kind {
        DocumentKind::Contract => (
            "an expert insurance claims analyst. Analyze the insurance contract",
            [
                "Coverage terms and conditions",
                "Exclusions and limitations",
                "Deductibles and policy limits",
                "Special conditions or endorsements",
                "Any red flags that could affect claim coverage",
            ],
            r#"    "coverage_terms": ["list of key coverage terms"],
    "exclusions": ["list of exclusions"],
    "deductibles": "deductible amount and type",
    "policy_limits": "policy limits information","#,
        ),
        DocumentKind::Inspection => (
            "an expert vehicle inspector. Analyze the inspection report",
            [
                "Vehicle damage assessment",
                "Pre-existing conditions",
                "Safety concerns",
                "Maintenance issues",
                "Any red flags that could affect insurance coverage",
            ],
            r#"    "damage_assessment": "overall damage assessment",
    "pre_existing_conditions": ["list of pre-existing conditions"],
    "safety_concerns": ["list of safety concerns"],
    "maintenance_issues": ["list of maintenance issues"],"#,
        ),
        DocumentKind::Acv => (
            "an expert vehicle appraiser. Analyze the ACV document",
            [
                "Vehicle valuation accuracy",
                "Market comparisons",
                "Condition adjustments",
                "Any discrepancies or concerns",
                "Red flags that could affect claim value",
            ],
            r#"    "valuation_accuracy": "assessment of valuation accuracy",
    "market_comparisons": ["list of market comparisons"],
    "condition_adjustments": ["list of condition adjustments"],
    "discrepancies": ["list of any discrepancies"],"#,
        ),
        DocumentKind::History => (
            "an expert vehicle history analyst. Analyze the vehicle history report",
            [
                "Title issues or problems",
                "Accident history",
                "Odometer discrepancies",
                "Salvage or rebuilt status",
                "Any red flags that could affect insurance coverage",
            ],
            r#"    "title_status": "current title status",
    "accident_history": ["list of accidents and severity"],
    "odometer_reading": "current odometer reading",
    "salvage_status": "salvage or rebuilt information","#,
        ),
        DocumentKind::Adjuster => (
            "an expert insurance adjuster. Analyze the adjuster assessment form",
            [
                "Claim assessment details",
                "Coverage recommendations",
                "Concerns or reservations",
                "Supporting documentation",
                "Any red flags that could affect claim approval",
            ],
            r#"    "claim_assessment": "overall claim assessment",
    "coverage_recommendation": "coverage recommendation",
    "concerns": ["list of concerns or reservations"],
    "supporting_docs": ["list of supporting documentation"],"#,
        ),
    };

    let focus_list = focus
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are {} and identify:\n\n{}\n\nReturn your analysis in this JSON format:\n{{\n{}\n{}\n}}",
        persona, focus_list, fields, RED_FLAG_SCHEMA
    )
}
