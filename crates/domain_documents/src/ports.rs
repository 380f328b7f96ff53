//! Document Domain Ports
//!
//! The analysis pipeline depends on two collaborators it never implements
//! itself: something that turns an uploaded file into text, and a language
//! model that turns text into a structured analysis. Both are reached through
//! the traits below so that adapters (a PDF library, an LLM HTTP client, a
//! scripted mock) can be swapped at startup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_documents::{ClaimAnalysisService, DocumentAnalyzer};
//!
//! let analyzer = DocumentAnalyzer::new(Arc::new(OpenAiModel::new(api_key)), config);
//! let service = ClaimAnalysisService::new(Arc::new(PdfExtractor), analyzer, evaluator);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{DomainPort, PortError};

use crate::kind::DocumentKind;

/// An uploaded claim document, before text extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub kind: DocumentKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(kind: DocumentKind, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Size of the upload in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A single chat-completion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// System prompt (persona and response schema)
    pub system: String,
    /// User message carrying the document text
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Port for turning an uploaded document into plain text
#[async_trait]
pub trait TextExtractor: DomainPort {
    /// Extracts the text content of a document
    ///
    /// Adapters should return `PortError::Transformation` for unreadable
    /// files and build the text with
    /// [`assemble_pages`](crate::extraction::assemble_pages).
    async fn extract(&self, document: &SourceDocument) -> Result<String, PortError>;
}

/// Port for the language model that analyzes document text
#[async_trait]
pub trait LanguageModel: DomainPort {
    /// Runs a completion and returns the raw response text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, PortError>;
}
