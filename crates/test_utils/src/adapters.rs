//! Mock Adapters
//!
//! In-memory implementations of the document ports. Responses are scripted
//! per document kind so pipeline tests can mix clean, flagged, unparseable,
//! and failing documents in one submission.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use core_kernel::{DomainPort, PortError};
use domain_documents::prompts::prompt_for;
use domain_documents::{
    AnalyzerConfig, CompletionRequest, DocumentKind, LanguageModel, SourceDocument, TextExtractor,
};

use crate::fixtures::ResponseFixtures;

/// Text extractor returning canned text per document kind
#[derive(Default)]
pub struct MockTextExtractor {
    texts: HashMap<DocumentKind, String>,
    failing: HashSet<DocumentKind>,
    calls: Mutex<Vec<DocumentKind>>,
}

impl MockTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text returned for a kind
    pub fn with_text(mut self, kind: DocumentKind, text: impl Into<String>) -> Self {
        self.texts.insert(kind, text.into());
        self
    }

    /// Makes extraction fail for a kind
    pub fn failing_on(mut self, kind: DocumentKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Kinds extracted so far, in call order
    pub fn calls(&self) -> Vec<DocumentKind> {
        self.calls.lock().expect("extractor call log poisoned").clone()
    }
}

impl DomainPort for MockTextExtractor {}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(&self, document: &SourceDocument) -> Result<String, PortError> {
        self.calls
            .lock()
            .expect("extractor call log poisoned")
            .push(document.kind);

        if self.failing.contains(&document.kind) {
            return Err(PortError::transformation(format!(
                "{} is not a readable PDF",
                document.file_name
            )));
        }

        Ok(self.texts.get(&document.kind).cloned().unwrap_or_else(|| {
            format!("--- Page 1 ---\nSample {} text", document.kind.title())
        }))
    }
}

/// Language model returning scripted responses per document kind
///
/// The kind is recognized from the user message preamble. Kinds without a
/// script receive a clean JSON response.
#[derive(Default)]
pub struct MockLanguageModel {
    responses: HashMap<DocumentKind, String>,
    failing: HashSet<DocumentKind>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw response for a kind
    pub fn respond(mut self, kind: DocumentKind, response: impl Into<String>) -> Self {
        self.responses.insert(kind, response.into());
        self
    }

    /// Responds to a kind with the given red flags
    pub fn flag(self, kind: DocumentKind, flags: &[&str]) -> Self {
        self.respond(kind, ResponseFixtures::with_flags(flags))
    }

    /// Makes the model call fail for a kind
    pub fn failing_on(mut self, kind: DocumentKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("model request log poisoned").clone()
    }

    fn kind_of(request: &CompletionRequest) -> Option<DocumentKind> {
        let config = AnalyzerConfig::default();
        DocumentKind::ALL
            .into_iter()
            .find(|kind| request.user.starts_with(prompt_for(*kind, &config).user_preamble))
    }
}

impl DomainPort for MockLanguageModel {}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, PortError> {
        self.requests
            .lock()
            .expect("model request log poisoned")
            .push(request.clone());

        let kind = Self::kind_of(request)
            .ok_or_else(|| PortError::validation("unrecognized prompt"))?;

        if self.failing.contains(&kind) {
            return Err(PortError::service_unavailable("language-model"));
        }

        Ok(self
            .responses
            .get(&kind)
            .cloned()
            .unwrap_or_else(ResponseFixtures::clean))
    }
}
