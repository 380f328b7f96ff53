//! Evaluation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::EvaluationId;
use domain_claims::classifier::{CategoryRule, SeverityRule};
use domain_claims::{CoverageDecision, FlagCategory, Severity};

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation_id: EvaluationId,
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub decision: CoverageDecision,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub flag: String,
    /// Tag of the document that raised the flag
    #[serde(default)]
    pub document: String,
}

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub severity_rules: &'static [SeverityRule],
    pub default_severity: Severity,
    pub category_rules: &'static [CategoryRule],
    pub default_category: FlagCategory,
    pub red_flag_threshold: usize,
}
