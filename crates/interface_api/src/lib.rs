//! HTTP API Layer
//!
//! This crate exposes the coverage evaluator over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Evaluation, classification, rule listing, and health checks
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_claims::CoverageEvaluator;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::middleware::audit_middleware;
use crate::handlers::{evaluation, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<CoverageEvaluator>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the evaluator from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluator settings are invalid
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let evaluator = CoverageEvaluator::new(config.evaluator_config())?;
        Ok(Self {
            evaluator: Arc::new(evaluator),
            config,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the evaluator settings are invalid
pub fn create_router(config: ApiConfig) -> Result<Router, ApiError> {
    Ok(router_with_state(AppState::new(config)?))
}

/// Creates the API router over an existing state
pub fn router_with_state(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Evaluation routes
    let evaluation_routes = Router::new()
        .route("/", post(evaluation::evaluate))
        .route("/classify", post(evaluation::classify))
        .route("/rules", get(evaluation::rules));

    let api_routes = Router::new()
        .nest("/evaluations", evaluation_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
