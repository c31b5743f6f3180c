//! YAML configuration file support for docmatch.
//!
//! Scan settings live in one YAML file so the upload workflow can change the
//! strategy or threshold without a rebuild.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "upload scan"
//!
//! matcher:
//!   version: 1
//!   strategy: "Default Scan"   # or lexical / semantic / "Advanced Scan"
//!   threshold: 0.5             # required, strict `>` comparison
//!   max_results: 20
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use matcher::{MatchConfig, MatchError, MatchStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocmatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    pub matcher: MatchYamlConfig,
}

impl DocmatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).inspect_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "config_read_failed");
        })?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocmatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        tracing::debug!(
            name = config.name.as_deref().unwrap_or("-"),
            strategy = %config.matcher.strategy,
            threshold = config.matcher.threshold,
            "config_loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher
            .to_match_config()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))?;
        Ok(())
    }

    /// Matcher settings as a validated [`MatchConfig`].
    pub fn to_match_config(&self) -> Result<MatchConfig, MatchError> {
        self.matcher.to_match_config()
    }
}

/// `matcher` section of the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Strategy name or scan label ("lexical", "Advanced Scan", ...).
    pub strategy: String,

    /// Required; has no default.
    pub threshold: f64,

    #[serde(default)]
    pub max_results: Option<usize>,

    #[serde(default = "default_parallel")]
    pub use_parallel: bool,
}

impl MatchYamlConfig {
    pub fn to_match_config(&self) -> Result<MatchConfig, MatchError> {
        let strategy: MatchStrategy = self.strategy.parse()?;
        let cfg = MatchConfig {
            version: self.version,
            strategy,
            threshold: self.threshold,
            max_results: self.max_results,
            use_parallel: self.use_parallel,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn default_version() -> u32 {
    1
}

fn default_parallel() -> bool {
    cfg!(feature = "parallel")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
version: "1.0"
name: "upload scan"
matcher:
  version: 1
  strategy: "Advanced Scan"
  threshold: 0.3
  max_results: 5
  use_parallel: true
"#;

    #[test]
    fn parses_full_config() {
        let cfg = DocmatchConfig::from_yaml(FULL).expect("valid config");
        assert_eq!(cfg.name.as_deref(), Some("upload scan"));

        let match_cfg = cfg.to_match_config().expect("valid matcher section");
        assert_eq!(match_cfg.strategy, MatchStrategy::Semantic);
        assert_eq!(match_cfg.threshold, 0.3);
        assert_eq!(match_cfg.max_results, Some(5));
        assert!(match_cfg.use_parallel);
    }

    #[test]
    fn minimal_config_fills_optional_fields() {
        let yaml = "version: \"1\"\nmatcher:\n  strategy: lexical\n  threshold: 0.5\n";
        let cfg = DocmatchConfig::from_yaml(yaml).expect("valid config");
        let match_cfg = cfg.to_match_config().expect("valid matcher section");

        assert_eq!(match_cfg.version, 1);
        assert_eq!(match_cfg.strategy, MatchStrategy::Lexical);
        assert_eq!(match_cfg.max_results, None);
        assert_eq!(match_cfg.use_parallel, cfg!(feature = "parallel"));
    }

    #[test]
    fn missing_threshold_is_a_parse_error() {
        let yaml = "version: \"1\"\nmatcher:\n  strategy: lexical\n";
        assert!(matches!(
            DocmatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn unsupported_version_rejected() {
        let yaml = "version: \"2\"\nmatcher:\n  strategy: lexical\n  threshold: 0.5\n";
        match DocmatchConfig::from_yaml(yaml) {
            Err(ConfigLoadError::UnsupportedVersion(v)) => assert_eq!(v, "2"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unknown_strategy_fails_validation() {
        let yaml = "version: \"1\"\nmatcher:\n  strategy: fuzzy\n  threshold: 0.5\n";
        match DocmatchConfig::from_yaml(yaml) {
            Err(ConfigLoadError::Validation(msg)) => assert!(msg.contains("fuzzy")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn zero_max_results_fails_validation() {
        let yaml = r#"
version: "1"
matcher:
  strategy: semantic
  threshold: 0.5
  max_results: 0
"#;
        assert!(matches!(
            DocmatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn non_finite_threshold_fails_validation() {
        let yaml = "version: \"1\"\nmatcher:\n  strategy: semantic\n  threshold: .nan\n";
        assert!(matches!(
            DocmatchConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let result = DocmatchConfig::from_file("/definitely/not/here/docmatch.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }
}
