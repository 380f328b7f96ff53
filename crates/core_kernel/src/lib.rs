//! Core Kernel - Foundational types for the claim coverage analyzer
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers for evaluations and submissions
//! - The open-set document tag used to key per-document analysis results
//! - The error type returned by collaborator ports (text extraction, language models)

pub mod identifiers;
pub mod document;
pub mod ports;

pub use identifiers::{EvaluationId, SubmissionId};
pub use document::DocumentTag;
pub use ports::{PortError, DomainPort};
