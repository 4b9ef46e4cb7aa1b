//! YAML configuration support for the matching service.
//!
//! Mirrors `ucfp`'s stage-config loader: a single document carries a
//! format `version`, an optional human-readable `name`, and the one
//! tunable block ([`MatchConfig`]) the pipeline actually reads. There
//! is no `normalize`/`attributes` section because neither crate has a
//! configurable parameter — normalization and attribute extraction are
//! fixed algorithms, not policy.
//!
//! ```yaml
//! version: "1.0"
//! name: "production"
//! match_config:
//!   fuzzy_threshold: 70.0
//!   confidence_exact_sku: 100.0
//!   confidence_exact_name: 95.0
//!   confidence_fuzzy_sku: 90.0
//!   confidence_fuzzy_name: 80.0
//!   confidence_ml: 70.0
//!   min_confidence_auto: 80.0
//!   enable_ml_matching: true
//! ```

use std::fs;
use std::path::Path;

use partmatch_strategies::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a `partmatch` deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PartmatchConfig {
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub match_config: MatchConfig,
}

impl PartmatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PartmatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
    }
}

impl Default for PartmatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            match_config: MatchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_yaml() {
        let cfg = PartmatchConfig::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed = PartmatchConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.match_config, cfg.match_config);
    }

    #[test]
    fn missing_match_config_falls_back_to_defaults() {
        let cfg = PartmatchConfig::from_yaml("version: \"1.0\"\n").unwrap();
        assert_eq!(cfg.match_config, MatchConfig::default());
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = PartmatchConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partmatch.yaml");
        fs::write(&path, "version: \"1.0\"\nname: \"staging\"\n").unwrap();
        let cfg = PartmatchConfig::from_file(&path).unwrap();
        assert_eq!(cfg.name.as_deref(), Some("staging"));
    }
}
