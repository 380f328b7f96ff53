//! Coverage evaluation handlers

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;

use core_kernel::{DocumentTag, EvaluationId};
use domain_claims::classifier::{DEFAULT_CATEGORY, DEFAULT_SEVERITY};
use domain_claims::Classification;

use crate::dto::evaluation::*;
use crate::{AppState, error::ApiError};

/// Evaluates a raw analysis bundle
///
/// Always answers 200: a bundle that cannot be read produces the `ERROR`
/// decision in the same shape as any other.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(bundle): Json<Value>,
) -> Json<EvaluationResponse> {
    let evaluation_id = EvaluationId::new_v7();
    let decision = state.evaluator.evaluate_raw(&bundle);

    tracing::info!(
        %evaluation_id,
        recommendation = %decision.recommendation,
        "Evaluation completed"
    );

    Json(EvaluationResponse {
        evaluation_id,
        evaluated_at: Utc::now(),
        decision,
    })
}

/// Classifies a single red flag
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<Classification>, ApiError> {
    if request.flag.trim().is_empty() {
        return Err(ApiError::Validation("flag must not be empty".to_string()));
    }

    let source = DocumentTag::new(request.document);
    Ok(Json(state.evaluator.classifier().classify(&request.flag, &source)))
}

/// Lists the keyword tables in match order and the active threshold
pub async fn rules(State(state): State<AppState>) -> Json<RulesResponse> {
    let classifier = state.evaluator.classifier();
    Json(RulesResponse {
        severity_rules: classifier.severity_rules(),
        default_severity: DEFAULT_SEVERITY,
        category_rules: classifier.category_rules(),
        default_category: DEFAULT_CATEGORY,
        red_flag_threshold: state.evaluator.config().red_flag_threshold,
    })
}
