//! Claim Document Domain
//!
//! Everything between an uploaded document and the coverage evaluator:
//!
//! - **Upload validation** and page-text assembly for extracted documents
//! - **Ports** for the text extractor and language model collaborators
//! - **Prompts** tailored to each document kind
//! - **Response parsing** of model output into analysis records
//! - **Pipeline** that extracts, analyzes, evaluates, and produces a report
//!
//! # Pipeline
//!
//! ```text
//! ClaimSubmission -> validate -> extract text -> analyze (LLM) -> AnalysisBundle
//!                 -> CoverageEvaluator -> ClaimReport
//! ```

pub mod kind;
pub mod config;
pub mod error;
pub mod extraction;
pub mod prompts;
pub mod parser;
pub mod ports;
pub mod analyzer;
pub mod pipeline;

pub use kind::DocumentKind;
pub use config::{AnalyzerConfig, UploadLimits};
pub use error::DocumentError;
pub use ports::{CompletionRequest, LanguageModel, SourceDocument, TextExtractor};
pub use analyzer::DocumentAnalyzer;
pub use pipeline::{ClaimAnalysisService, ClaimReport, ClaimSubmission};
