//! Parsing of language-model responses into analysis records

use serde_json::Value;

use domain_claims::AnalysisResult;

use crate::kind::DocumentKind;

/// Finding recorded when a response could not be parsed into fields
pub const UNSTRUCTURED_FINDING: &str = "Analysis completed but structured parsing failed";
/// Recommendation recorded when a response could not be parsed into fields
pub const UNSTRUCTURED_RECOMMENDATION: &str = "Review the analysis manually for complete details";
/// Finding recorded when the model call failed
pub const FAILED_FINDING: &str = "Analysis failed - manual review required";
/// Recommendation recorded when the model call failed
pub const FAILED_RECOMMENDATION: &str = "Review document manually and contact support if needed";

/// Parses a model response
///
/// The JSON object is taken from the first `{` to the last `}` so that prose
/// around it is tolerated. When no object can be read the raw text is kept
/// in a fallback record with no red flags.
pub fn parse_analysis_response(response: &str) -> AnalysisResult {
    let Some(json) = json_object_span(response) else {
        return unstructured_result(response);
    };

    let parsed = serde_json::from_str::<Value>(json)
        .map_err(|e| e.to_string())
        .and_then(|value| AnalysisResult::from_value(&value).map_err(|e| e.to_string()));

    match parsed {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(%error, "Failed to parse JSON response");
            unstructured_result(response)
        }
    }
}

/// Record kept when a response has no readable structure
pub fn unstructured_result(response: &str) -> AnalysisResult {
    AnalysisResult {
        analysis: Some(response.to_string()),
        key_findings: vec![UNSTRUCTURED_FINDING.to_string()],
        recommendations: vec![UNSTRUCTURED_RECOMMENDATION.to_string()],
        ..AnalysisResult::default()
    }
}

/// Error-marked record for a document whose analysis failed
pub fn failed_result(kind: DocumentKind) -> AnalysisResult {
    AnalysisResult {
        key_findings: vec![FAILED_FINDING.to_string()],
        recommendations: vec![FAILED_RECOMMENDATION.to_string()],
        ..AnalysisResult::failed(format!("Failed to analyze {} document", kind))
    }
}

fn json_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_surrounded_by_prose() {
        let response = r#"Here is my analysis:
{"red_flags": ["Odometer rollback suspected"], "key_findings": ["Two owners"], "title_status": "clean"}
Let me know if you need more."#;
        let result = parse_analysis_response(response);
        assert_eq!(result.red_flags, vec!["Odometer rollback suspected"]);
        assert_eq!(result.key_findings, vec!["Two owners"]);
        assert!(result.details.contains_key("title_status"));
        assert!(result.analysis.is_none());
    }

    #[test]
    fn test_structured_red_flags() {
        let response = r#"{"red_flags": [{"issue": "Salvage title", "severity": "HIGH", "impact": "excluded"}]}"#;
        assert_eq!(parse_analysis_response(response).red_flags, vec!["Salvage title"]);
    }

    #[test]
    fn test_no_braces_yields_fallback() {
        let result = parse_analysis_response("The contract looks fine.");
        assert!(result.red_flags.is_empty());
        assert!(!result.is_failed());
        assert_eq!(result.analysis.as_deref(), Some("The contract looks fine."));
        assert_eq!(result.key_findings, vec![UNSTRUCTURED_FINDING]);
    }

    #[test]
    fn test_invalid_json_yields_fallback() {
        let result = parse_analysis_response("{red_flags: nope}");
        assert_eq!(result.recommendations, vec![UNSTRUCTURED_RECOMMENDATION]);
    }

    #[test]
    fn test_reversed_braces_yield_fallback() {
        let result = parse_analysis_response("} oops {");
        assert_eq!(result.analysis.as_deref(), Some("} oops {"));
    }

    #[test]
    fn test_failed_result() {
        let result = failed_result(DocumentKind::Inspection);
        assert_eq!(result.error.as_deref(), Some("Failed to analyze inspection document"));
        assert_eq!(result.key_findings, vec![FAILED_FINDING]);
        assert!(result.red_flags.is_empty());
    }
}
