//! Ports and Adapters Infrastructure
//!
//! The coverage engine never talks to the outside world itself. Text
//! extraction and language-model classification are collaborators reached
//! through port traits defined in `domain_documents`; this module holds the
//! pieces those ports share.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          ClaimAnalysisService                │
//! └──────────────────────────────────────────────┘
//!            │                      │
//!            ▼                      ▼
//!   ┌─────────────────┐    ┌─────────────────┐
//!   │  TextExtractor  │    │  LanguageModel  │
//!   │     (port)      │    │     (port)      │
//!   └─────────────────┘    └─────────────────┘
//!            ▲                      ▲
//!     PDF adapter, mock      LLM client, mock
//! ```

use thiserror::Error;

/// Error type for port operations
///
/// Every adapter reports failures through this type so that callers handle
/// extraction and model errors uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The adapter rejected the request
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// Rate limit exceeded for external API
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        retry_after_secs: u64,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The input could not be turned into the expected output
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },
}

impl PortError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>, duration_ms: u64) -> Self {
        PortError::Timeout {
            operation: operation.into(),
            duration_ms,
        }
    }

    /// Creates a ServiceUnavailable error
    pub fn service_unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}
