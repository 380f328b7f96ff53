//! Evaluator configuration

use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Default number of red flags at which a claim is denied outright
pub const DEFAULT_RED_FLAG_THRESHOLD: usize = 3;

/// Tunables of the coverage evaluator
///
/// Constructed once at process start and handed to
/// [`CoverageEvaluator::new`](crate::CoverageEvaluator::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Total red flag count at or above which coverage is denied
    pub red_flag_threshold: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            red_flag_threshold: DEFAULT_RED_FLAG_THRESHOLD,
        }
    }
}

impl EvaluatorConfig {
    /// Creates a configuration with a custom red flag threshold
    pub fn with_threshold(red_flag_threshold: usize) -> Self {
        Self { red_flag_threshold }
    }

    /// Validates the configuration
    ///
    /// A threshold of zero would deny every claim, including one with no red
    /// flags at all, so it is rejected.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.red_flag_threshold == 0 {
            return Err(ClaimError::invalid_configuration(
                "red_flag_threshold must be at least 1",
            ));
        }
        Ok(())
    }
}
