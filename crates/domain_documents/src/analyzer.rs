//! Language-model document analysis

use std::sync::Arc;
use std::time::Duration;

use core_kernel::PortError;
use domain_claims::AnalysisResult;

use crate::config::AnalyzerConfig;
use crate::kind::DocumentKind;
use crate::parser::{failed_result, parse_analysis_response};
use crate::ports::{CompletionRequest, LanguageModel};
use crate::prompts::prompt_for;

/// Analyzes extracted document text with a language model
///
/// Never fails: a model error or timeout yields the error-marked record for
/// the document kind, so one bad document lowers the confidence of the
/// decision instead of aborting it.
#[derive(Clone)]
pub struct DocumentAnalyzer {
    model: Arc<dyn LanguageModel>,
    config: AnalyzerConfig,
}

impl DocumentAnalyzer {
    pub fn new(model: Arc<dyn LanguageModel>, config: AnalyzerConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Builds the completion request for a document
    pub fn request_for(&self, kind: DocumentKind, content: &str) -> CompletionRequest {
        let prompt = prompt_for(kind, &self.config);
        CompletionRequest {
            model: self.config.model.clone(),
            user: prompt.user_message(content),
            system: prompt.system,
            temperature: self.config.temperature,
            max_tokens: prompt.max_tokens,
        }
    }

    /// Analyzes one document's text
    pub async fn analyze(&self, kind: DocumentKind, content: &str) -> AnalysisResult {
        let request = self.request_for(kind, content);
        let timeout = Duration::from_secs(self.config.request_timeout_secs);

        match tokio::time::timeout(timeout, self.model.complete(&request)).await {
            Ok(Ok(response)) => {
                let result = parse_analysis_response(&response);
                tracing::debug!(
                    document = %kind,
                    red_flags = result.red_flags.len(),
                    "Document analyzed"
                );
                result
            }
            Ok(Err(e)) => {
                tracing::error!(document = %kind, error = %e, "Error analyzing document");
                failed_result(kind)
            }
            Err(_) => {
                let error = PortError::timeout(
                    "complete",
                    self.config.request_timeout_secs.saturating_mul(1000),
                );
                tracing::error!(document = %kind, error = %error, "Document analysis timed out");
                failed_result(kind)
            }
        }
    }
}

impl std::fmt::Debug for DocumentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAnalyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
