//! Run configuration.
//!
//! Configuration is read from a TOML file. Every key is optional:
//!
//! ```toml
//! [runoff]
//! baseflow_mm_per_day = 0.0
//!
//! [paths]
//! forcing = "data/forcing.csv"
//! reaches = "data/reaches.csv"
//! output = "data/model_results.csv"
//! ```
//!
//! Unknown keys are rejected so that a misspelt or obsolete setting cannot
//! be silently ignored.

use crate::errors::{RunError, RunResult};
use reachmix_core::RunoffParameters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Daily forcing table
    ///
    /// Default: data/forcing.csv
    pub forcing: PathBuf,
    /// Reach table
    ///
    /// Default: data/reaches.csv
    pub reaches: PathBuf,
    /// Result table, overwritten on each run
    ///
    /// Default: data/model_results.csv
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            forcing: PathBuf::from("data/forcing.csv"),
            reaches: PathBuf::from("data/reaches.csv"),
            output: PathBuf::from("data/model_results.csv"),
        }
    }
}

/// Path overrides taken from the command line or the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOverrides {
    pub forcing: Option<PathBuf>,
    pub reaches: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Complete configuration of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub runoff: RunoffParameters,
    pub paths: PathsConfig,
}

impl RunConfig {
    pub fn from_toml_str(text: &str, origin: &str) -> RunResult<Self> {
        toml::from_str(text).map_err(|source| RunError::ConfigParse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> RunResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| RunError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Replace configured paths with any overrides that are set.
    pub fn apply_overrides(&mut self, overrides: PathOverrides) {
        if let Some(forcing) = overrides.forcing {
            self.paths.forcing = forcing;
        }
        if let Some(reaches) = overrides.reaches {
            self.paths.reaches = reaches;
        }
        if let Some(output) = overrides.output {
            self.paths.output = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RunConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.paths.forcing, PathBuf::from("data/forcing.csv"));
        assert_eq!(config.runoff.baseflow_mm_per_day, 0.0);
    }

    #[test]
    fn partial_config() {
        let text = r#"
            [runoff]
            baseflow_mm_per_day = 0.4

            [paths]
            output = "out/results.csv"
        "#;
        let config = RunConfig::from_toml_str(text, "inline").unwrap();
        assert_eq!(config.runoff.baseflow_mm_per_day, 0.4);
        assert_eq!(config.paths.output, PathBuf::from("out/results.csv"));
        assert_eq!(config.paths.reaches, PathBuf::from("data/reaches.csv"));
    }

    #[test]
    fn legacy_beta_key_is_rejected() {
        let err = RunConfig::from_toml_str("beta = 0.85", "legacy.toml").unwrap_err();
        assert!(matches!(err, RunError::ConfigParse { .. }));
        assert!(err.to_string().contains("legacy.toml"));
    }

    #[test]
    fn round_trip_through_toml() {
        let config = RunConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = RunConfig::from_toml_str(&text, "inline").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn overrides() {
        let mut config = RunConfig::default();
        config.apply_overrides(PathOverrides {
            forcing: Some(PathBuf::from("f.csv")),
            reaches: None,
            output: Some(PathBuf::from("o.csv")),
        });
        assert_eq!(config.paths.forcing, PathBuf::from("f.csv"));
        assert_eq!(config.paths.reaches, PathBuf::from("data/reaches.csv"));
        assert_eq!(config.paths.output, PathBuf::from("o.csv"));
    }

    #[test]
    fn missing_config_file() {
        let err = RunConfig::from_file(Path::new("no/such/config.toml")).unwrap_err();
        assert!(matches!(err, RunError::ConfigRead { .. }));
    }
}
