use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

///
/// Scan settings read from a TOML or YAML file. Every field is optional;
/// command line flags take precedence over anything set here.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub condition: Option<String>,
    pub database: Option<PathBuf>,
    pub genotypes: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl ScanConfig {
    ///
    /// Load a config, choosing the parser by extension: `.yaml`/`.yml` for
    /// YAML, anything else for TOML.
    ///
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"));

        let config = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config {:?}", path))?
        } else {
            toml::from_str(&content).with_context(|| format!("Invalid TOML config {:?}", path))?
        };

        Ok(config)
    }
}
