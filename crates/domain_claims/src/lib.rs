//! Claim Coverage Evaluation Domain
//!
//! This crate turns the per-document analysis results of a claim submission
//! into a single, explainable coverage recommendation.
//!
//! # Evaluation Flow
//!
//! ```text
//! AnalysisBundle -> classify each red flag -> rank by severity -> decide
//!                -> risk score + confidence -> CoverageDecision
//! ```
//!
//! The engine is synchronous and stateless across calls. It never talks to a
//! language model or reads documents itself; it consumes the red-flag strings
//! those collaborators already produced.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod decision;
pub mod evaluator;
pub mod report;
pub mod error;

pub use analysis::{AnalysisBundle, AnalysisResult};
pub use classifier::{Classification, FlagCategory, FlagClassifier, Severity};
pub use config::EvaluatorConfig;
pub use decision::{
    ClassifiedFlag, ConfidenceLevel, CoverageDecision, CoverageDetails, Recommendation, RiskLevel,
};
pub use evaluator::CoverageEvaluator;
pub use error::ClaimError;
