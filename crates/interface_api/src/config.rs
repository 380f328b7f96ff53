//! API configuration

use serde::Deserialize;

use domain_claims::config::DEFAULT_RED_FLAG_THRESHOLD;
use domain_claims::EvaluatorConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Red flag count at or above which coverage is denied
    pub red_flag_threshold: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            red_flag_threshold: DEFAULT_RED_FLAG_THRESHOLD,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `APP_`-prefixed environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Evaluator settings derived from this configuration
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::with_threshold(self.red_flag_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.evaluator_config(), EvaluatorConfig::default());
    }
}
