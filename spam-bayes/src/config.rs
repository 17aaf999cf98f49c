use crate::error::{BayesError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "spam-bayes.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Where the trained model is stored
    #[serde(default = "default_model_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Corpus used when no file argument is given
    #[serde(default = "default_corpus_path")]
    pub default_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// pretty, compact or json
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_model_path() -> String {
    "brain.json".to_string()
}

fn default_corpus_path() -> String {
    "corpus/SMSSpamCollection.txt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            default_path: default_corpus_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            BayesError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| BayesError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.path.trim().is_empty() {
            return Err(BayesError::Config("model.path must not be empty".to_string()));
        }

        if self.corpus.default_path.trim().is_empty() {
            return Err(BayesError::Config(
                "corpus.default_path must not be empty".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(BayesError::Config(format!(
                "Unknown logging format '{}' (expected pretty, compact or json)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.path, "brain.json");
        assert_eq!(config.corpus.default_path, "corpus/SMSSpamCollection.txt");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[model]
path = "/var/lib/spam-bayes/brain.json"

[logging]
level = "debug"
format = "json"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.model.path, "/var/lib/spam-bayes/brain.json");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        // Missing sections fall back to defaults
        assert_eq!(config.corpus.default_path, "corpus/SMSSpamCollection.txt");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.model.path, "brain.json");
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = Config::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, BayesError::Config(_)));
    }

    #[test]
    fn test_empty_model_path_rejected() {
        let err = Config::from_toml("[model]\npath = \"\"\n").unwrap_err();
        assert!(matches!(err, BayesError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/spam-bayes.toml").unwrap_err();
        assert!(matches!(err, BayesError::Config(_)));
    }
}
