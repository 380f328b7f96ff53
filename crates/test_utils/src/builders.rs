//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use serde_json::Value;

use domain_claims::{AnalysisBundle, AnalysisResult};
use domain_documents::{ClaimSubmission, DocumentKind, SourceDocument};

/// Builder for a single document analysis
#[derive(Default)]
pub struct AnalysisResultBuilder {
    result: AnalysisResult,
}

impl AnalysisResultBuilder {
    /// Creates a builder for a clean, successful analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a red flag
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.result.red_flags.push(flag.into());
        self
    }

    /// Adds several red flags
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.result.red_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Adds a key finding
    pub fn with_finding(mut self, finding: impl Into<String>) -> Self {
        self.result.key_findings.push(finding.into());
        self
    }

    /// Adds a recommendation
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.result.recommendations.push(recommendation.into());
        self
    }

    /// Marks the analysis as failed
    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.result.error = Some(error.into());
        self
    }

    /// Adds a document-specific detail field
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.result.details.insert(key.into(), value);
        self
    }

    /// Builds the analysis
    pub fn build(self) -> AnalysisResult {
        self.result
    }
}

/// Builder for analysis bundles
#[derive(Default)]
pub struct BundleBuilder {
    bundle: AnalysisBundle,
}

impl BundleBuilder {
    /// Creates an empty bundle builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document result
    pub fn document(mut self, tag: &str, result: AnalysisResult) -> Self {
        self.bundle.insert(tag, result);
        self
    }

    /// Adds a successful document carrying the given flags
    pub fn flagged<I, S>(self, tag: &str, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document(tag, AnalysisResult::with_red_flags(flags))
    }

    /// Adds a clean, successful document
    pub fn clean(self, tag: &str) -> Self {
        self.document(tag, AnalysisResult::new())
    }

    /// Adds a document that failed analysis
    pub fn failed(self, tag: &str) -> Self {
        self.document(tag, AnalysisResult::failed(format!("Failed to analyze {} document", tag)))
    }

    /// Builds the bundle
    pub fn build(self) -> AnalysisBundle {
        self.bundle
    }
}

/// Builder for claim submissions
pub struct SubmissionBuilder {
    documents: Vec<SourceDocument>,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    /// Creates a builder holding only a contract
    pub fn new() -> Self {
        Self {
            documents: vec![pdf_document(DocumentKind::Contract)],
        }
    }

    /// Creates a builder with no documents at all
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Creates a builder holding one document of every kind
    pub fn complete() -> Self {
        Self {
            documents: DocumentKind::ALL.into_iter().map(pdf_document).collect(),
        }
    }

    /// Adds a PDF document of the given kind
    pub fn with(mut self, kind: DocumentKind) -> Self {
        self.documents.push(pdf_document(kind));
        self
    }

    /// Adds an arbitrary document
    pub fn with_document(mut self, document: SourceDocument) -> Self {
        self.documents.push(document);
        self
    }

    /// Builds the submission
    ///
    /// # Panics
    ///
    /// Panics if two documents share a kind
    pub fn build(self) -> ClaimSubmission {
        let mut submission = ClaimSubmission::new();
        for document in self.documents {
            submission.add(document).expect("duplicate document kind in test submission");
        }
        submission
    }
}

/// A small PDF upload named after its kind
pub fn pdf_document(kind: DocumentKind) -> SourceDocument {
    SourceDocument::new(kind, format!("{}.pdf", kind), b"%PDF-1.4 test".to_vec())
}
