//! Claim analysis pipeline
//!
//! Orchestrates a claim submission from uploaded files to the exportable
//! report: validate uploads, extract text, analyze each document, and run the
//! coverage evaluator over the resulting bundle.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use core_kernel::SubmissionId;
use domain_claims::{AnalysisBundle, CoverageDecision, CoverageEvaluator};

use crate::analyzer::DocumentAnalyzer;
use crate::config::UploadLimits;
use crate::error::DocumentError;
use crate::extraction::validate_upload;
use crate::kind::DocumentKind;
use crate::ports::{SourceDocument, TextExtractor};

/// The documents uploaded for one claim
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    id: SubmissionId,
    documents: Vec<SourceDocument>,
}

impl Default for ClaimSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmission {
    /// Creates an empty submission with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: SubmissionId::new_v7(),
            documents: Vec::new(),
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// Adds a document
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDocument` if a document of the same kind is present
    pub fn add(&mut self, document: SourceDocument) -> Result<(), DocumentError> {
        if self.get(document.kind).is_some() {
            return Err(DocumentError::DuplicateDocument(document.kind));
        }
        self.documents.push(document);
        Ok(())
    }

    /// Builder-style [`add`](Self::add)
    pub fn with_document(mut self, document: SourceDocument) -> Result<Self, DocumentError> {
        self.add(document)?;
        Ok(self)
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&SourceDocument> {
        self.documents.iter().find(|document| document.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in canonical processing order, contract first
    pub fn ordered(&self) -> Vec<&SourceDocument> {
        let mut documents: Vec<&SourceDocument> = self.documents.iter().collect();
        documents.sort_by_key(|document| document.kind);
        documents
    }

    /// Checks that every required document is present and every upload is acceptable
    pub fn validate(&self, limits: &UploadLimits) -> Result<(), DocumentError> {
        let missing_required = DocumentKind::ALL
            .into_iter()
            .any(|kind| kind.is_required() && self.get(kind).is_none());
        if missing_required {
            return Err(DocumentError::MissingContract);
        }

        for document in &self.documents {
            validate_upload(&document.file_name, document.size(), limits)?;
        }
        Ok(())
    }
}

/// Exportable result of analyzing one claim submission
#[derive(Debug, Clone, Serialize)]
pub struct ClaimReport {
    pub submission_id: SubmissionId,
    pub generated_at: DateTime<Utc>,
    pub coverage_decision: CoverageDecision,
    /// Per-document analyses in canonical order
    pub analysis_results: AnalysisBundle,
}

impl ClaimReport {
    /// Renders the report as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested file name for a downloaded report
    pub fn export_file_name(&self) -> String {
        format!(
            "coverage_analysis_{}.json",
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

/// Service running a claim submission through the whole pipeline
#[derive(Clone)]
pub struct ClaimAnalysisService {
    extractor: Arc<dyn TextExtractor>,
    analyzer: DocumentAnalyzer,
    evaluator: Arc<CoverageEvaluator>,
    limits: UploadLimits,
}

impl ClaimAnalysisService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        analyzer: DocumentAnalyzer,
        evaluator: Arc<CoverageEvaluator>,
    ) -> Self {
        Self {
            extractor,
            analyzer,
            evaluator,
            limits: UploadLimits::default(),
        }
    }

    /// Replaces the upload limits
    pub fn with_limits(mut self, limits: UploadLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    /// Processes a submission into a report
    ///
    /// Text is extracted from every document before any analysis starts, so a
    /// file that cannot be read aborts the run without spending model calls.
    /// Analysis itself never aborts; failed documents are carried as
    /// error-marked results and lower the decision's confidence.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or text extraction fails
    pub async fn process(&self, submission: &ClaimSubmission) -> Result<ClaimReport, DocumentError> {
        submission.validate(&self.limits)?;

        let documents = submission.ordered();
        let mut extracted = Vec::with_capacity(documents.len());
        for document in documents {
            let text = self.extractor.extract(document).await.map_err(|source| {
                DocumentError::Extraction {
                    kind: document.kind,
                    file_name: document.file_name.clone(),
                    source,
                }
            })?;
            if text.trim().is_empty() {
                return Err(DocumentError::NoExtractableText);
            }
            tracing::info!(
                submission_id = %submission.id(),
                document = %document.kind,
                characters = text.len(),
                "Extracted document text"
            );
            extracted.push((document.kind, text));
        }

        let mut bundle = AnalysisBundle::new();
        for (kind, text) in &extracted {
            let result = self.analyzer.analyze(*kind, text).await;
            bundle.insert(kind.tag(), result);
        }

        let coverage_decision = self.evaluator.evaluate(&bundle);

        tracing::info!(
            submission_id = %submission.id(),
            recommendation = %coverage_decision.recommendation,
            documents = bundle.len(),
            "Claim analysis completed"
        );

        Ok(ClaimReport {
            submission_id: submission.id(),
            generated_at: Utc::now(),
            coverage_decision,
            analysis_results: bundle,
        })
    }
}

impl std::fmt::Debug for ClaimAnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimAnalysisService")
            .field("analyzer", &self.analyzer)
            .field("evaluator", &self.evaluator)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
