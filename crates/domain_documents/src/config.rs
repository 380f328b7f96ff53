//! Document handling configuration

use serde::{Deserialize, Serialize};

/// Settings for language-model analysis of documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Model identifier passed to the language model port
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Token budget for contract analysis
    pub contract_max_tokens: u32,
    /// Token budget for every other document kind
    pub document_max_tokens: u32,
    /// Upper bound on a single model call
    pub request_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.1,
            contract_max_tokens: 2000,
            document_max_tokens: 1500,
            request_timeout_secs: 300,
        }
    }
}

/// Limits applied to uploaded documents before extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub max_file_size_bytes: u64,
    /// Accepted file extensions, lowercase and without the dot
    pub supported_extensions: Vec<String>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 50 * 1024 * 1024,
            supported_extensions: vec!["pdf".to_string()],
        }
    }
}
