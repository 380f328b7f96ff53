//! Per-document analysis results
//!
//! An [`AnalysisResult`] is what the language-model collaborator produced for
//! one document. An [`AnalysisBundle`] maps document tags to those results in
//! insertion order. Raw JSON is validated once, in [`AnalysisBundle::from_value`],
//! so the evaluator itself never probes for optional fields.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use core_kernel::DocumentTag;

use crate::error::ClaimError;

/// Analysis of a single claim document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Red flags in the order the analysis reported them
    pub red_flags: Vec<String>,
    /// Notable findings, most important first
    pub key_findings: Vec<String>,
    /// Follow-up recommendations
    pub recommendations: Vec<String>,
    /// Present when the document could not be analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw model output kept when it could not be parsed into fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Document-specific fields (coverage terms, title status, ...)
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl AnalysisResult {
    /// Creates an empty, successful analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a successful analysis carrying the given red flags
    pub fn with_red_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            red_flags: flags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates an analysis marked as failed
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Returns true if the document could not be analyzed
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Parses one document entry of a raw bundle
    ///
    /// Absent or `null` list fields are treated as empty. Red flags may be
    /// plain strings or objects carrying an `issue` string; the `severity`
    /// and `impact` a model attaches to such objects are ignored since every
    /// flag is re-classified. Any other red flag shape is malformed input.
    pub fn from_value(value: &Value) -> Result<Self, ClaimError> {
        let object = value.as_object().ok_or_else(|| {
            ClaimError::malformed(format!(
                "analysis result must be an object, found {}",
                value_kind(value)
            ))
        })?;

        let mut result = AnalysisResult::default();
        for (key, field) in object {
            match key.as_str() {
                "red_flags" => result.red_flags = parse_red_flags(field)?,
                "key_findings" => result.key_findings = parse_text_list(key, field)?,
                "recommendations" => result.recommendations = parse_text_list(key, field)?,
                // The key's presence alone marks the document as failed
                "error" => result.error = Some(error_marker(field)),
                "analysis" => result.analysis = optional_text(field),
                _ => {
                    result.details.insert(key.clone(), field.clone());
                }
            }
        }

        Ok(result)
    }
}

/// Analysis results of one claim submission, keyed by document tag
///
/// Iteration order is insertion order, which fixes the order in which red
/// flags are collected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisBundle {
    documents: Vec<(DocumentTag, AnalysisResult)>,
}

impl AnalysisBundle {
    /// Creates an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document result
    ///
    /// Re-inserting an existing tag replaces its result in place and returns
    /// the previous one.
    pub fn insert(
        &mut self,
        tag: impl Into<DocumentTag>,
        result: AnalysisResult,
    ) -> Option<AnalysisResult> {
        let tag = tag.into();
        match self.documents.iter_mut().find(|(existing, _)| *existing == tag) {
            Some((_, slot)) => Some(std::mem::replace(slot, result)),
            None => {
                self.documents.push((tag, result));
                None
            }
        }
    }

    /// Builder-style insert
    pub fn with(mut self, tag: impl Into<DocumentTag>, result: AnalysisResult) -> Self {
        self.insert(tag, result);
        self
    }

    /// Looks up the result for a document tag
    pub fn get(&self, tag: &str) -> Option<&AnalysisResult> {
        self.documents
            .iter()
            .find(|(existing, _)| existing.as_str() == tag)
            .map(|(_, result)| result)
    }

    /// Iterates documents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&DocumentTag, &AnalysisResult)> {
        self.documents.iter().map(|(tag, result)| (tag, result))
    }

    /// Number of documents in the bundle
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the bundle holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents without an error marker
    pub fn analyzed_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|(_, result)| !result.is_failed())
            .count()
    }

    /// Parses and validates a raw bundle
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::MalformedInput` if the value is not an object, or
    /// if any document entry cannot be read as an analysis result.
    pub fn from_value(value: &Value) -> Result<Self, ClaimError> {
        let object = value.as_object().ok_or_else(|| {
            ClaimError::malformed(format!(
                "analysis bundle must be an object keyed by document type, found {}",
                value_kind(value)
            ))
        })?;

        let mut bundle = AnalysisBundle::new();
        for (tag, entry) in object {
            let result = AnalysisResult::from_value(entry).map_err(|e| match e {
                ClaimError::MalformedInput(message) => {
                    ClaimError::malformed(format!("document '{}': {}", tag, message))
                }
                other => other,
            })?;
            bundle.insert(tag.as_str(), result);
        }

        Ok(bundle)
    }
}

impl FromIterator<(DocumentTag, AnalysisResult)> for AnalysisBundle {
    fn from_iter<T: IntoIterator<Item = (DocumentTag, AnalysisResult)>>(iter: T) -> Self {
        let mut bundle = AnalysisBundle::new();
        for (tag, result) in iter {
            bundle.insert(tag, result);
        }
        bundle
    }
}

impl Serialize for AnalysisBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.documents.len()))?;
        for (tag, result) in &self.documents {
            map.serialize_entry(tag, result)?;
        }
        map.end()
    }
}

fn parse_red_flags(field: &Value) -> Result<Vec<String>, ClaimError> {
    let items = match field {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(ClaimError::malformed(format!(
                "red_flags must be a list, found {}",
                value_kind(other)
            )))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(text) => Ok(text.clone()),
            Value::Object(flag) => match flag.get("issue") {
                Some(Value::String(issue)) => Ok(issue.clone()),
                _ => Err(ClaimError::malformed(format!(
                    "red_flags[{}] is an object without an 'issue' string",
                    index
                ))),
            },
            other => Err(ClaimError::malformed(format!(
                "red_flags[{}] must be text, found {}",
                index,
                value_kind(other)
            ))),
        })
        .collect()
}

fn parse_text_list(key: &str, field: &Value) -> Result<Vec<String>, ClaimError> {
    match field {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            })
            .collect()),
        other => Err(ClaimError::malformed(format!(
            "{} must be a list, found {}",
            key,
            value_kind(other)
        ))),
    }
}

fn error_marker(field: &Value) -> String {
    match field {
        Value::String(message) => message.clone(),
        Value::Null => "unknown error".to_string(),
        other => other.to_string(),
    }
}

fn optional_text(field: &Value) -> Option<String> {
    match field {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_are_empty() {
        let result = AnalysisResult::from_value(&json!({})).unwrap();
        assert!(result.red_flags.is_empty());
        assert!(result.key_findings.is_empty());
        assert!(!result.is_failed());
    }

    #[test]
    fn test_structured_flags_use_issue_text() {
        let result = AnalysisResult::from_value(&json!({
            "red_flags": [
                "Plain flag",
                {"issue": "Salvage title found", "severity": "LOW", "impact": "n/a"}
            ]
        }))
        .unwrap();
        assert_eq!(result.red_flags, vec!["Plain flag", "Salvage title found"]);
    }

    #[test]
    fn test_numeric_flag_is_malformed() {
        let result = AnalysisResult::from_value(&json!({"red_flags": [42]}));
        assert!(matches!(result, Err(ClaimError::MalformedInput(_))));
    }

    #[test]
    fn test_error_key_presence_marks_failure() {
        let result = AnalysisResult::from_value(&json!({"error": null})).unwrap();
        assert!(result.is_failed());
    }

    #[test]
    fn test_unknown_fields_kept_as_details() {
        let result = AnalysisResult::from_value(&json!({"title_status": "clean"})).unwrap();
        assert_eq!(result.details.get("title_status"), Some(&json!("clean")));
    }

    #[test]
    fn test_bundle_preserves_insertion_order() {
        let bundle = AnalysisBundle::from_value(&json!({
            "inspection": {},
            "contract": {},
            "acv": {}
        }))
        .unwrap();
        let tags: Vec<&str> = bundle.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["inspection", "contract", "acv"]);
    }

    #[test]
    fn test_bundle_insert_replaces_in_place() {
        let mut bundle = AnalysisBundle::new()
            .with("contract", AnalysisResult::new())
            .with("history", AnalysisResult::new());
        let previous = bundle.insert("contract", AnalysisResult::failed("boom"));
        assert!(previous.is_some());
        assert_eq!(bundle.len(), 2);
        assert!(bundle.get("contract").unwrap().is_failed());
        assert_eq!(bundle.iter().next().unwrap().0, "contract");
    }

    #[test]
    fn test_non_object_bundle_is_malformed() {
        let result = AnalysisBundle::from_value(&json!(["contract"]));
        assert!(matches!(result, Err(ClaimError::MalformedInput(_))));
    }

    #[test]
    fn test_bundle_serializes_as_ordered_map() {
        let bundle = AnalysisBundle::new()
            .with("history", AnalysisResult::with_red_flags(["Odometer rollback"]))
            .with("acv", AnalysisResult::new());
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.find("history").unwrap() < json.find("acv").unwrap());
    }
}
