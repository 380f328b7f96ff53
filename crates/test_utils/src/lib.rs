//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim coverage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built red flags, bundles, and model responses
//! - `builders`: Builder patterns for analysis results and submissions
//! - `adapters`: Mock text extractor and language model
//! - `assertions`: Custom assertion helpers for coverage decisions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod adapters;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use adapters::*;
pub use assertions::*;
pub use generators::*;
