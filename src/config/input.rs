//! Resolved input snapshot.
//!
//! The checks run over one document holding the already-resolved merge
//! policy, plugin enablement and job lists. TOML and JSON are accepted,
//! chosen by file extension.

use checkconfig_model::{JobConfig, PluginConfig, TideConfig};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigError;
use crate::tide::{RuleBinding, RuleRegistry};

/// Everything the checks consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputBundle {
    #[serde(default)]
    pub tide: TideConfig,

    #[serde(default)]
    pub plugins: PluginConfig,

    #[serde(default)]
    pub jobs: JobConfig,

    /// Replaces the built-in binding registry when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<RuleBinding>>,
}

impl InputBundle {
    /// The binding registry to validate against.
    pub fn registry(&self) -> RuleRegistry {
        match &self.bindings {
            Some(bindings) => RuleRegistry::new(bindings.clone()),
            None => RuleRegistry::default(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(contents)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }
}

/// A bundle together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub bundle: InputBundle,
    pub path: PathBuf,
    /// SHA-256 of the raw file bytes.
    pub digest: String,
}

/// Read and parse an input snapshot.
pub fn load_input(path: &Path) -> Result<LoadedInput, ConfigError> {
    let bytes = fs::read(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hex::encode(hasher.finalize());

    let contents = String::from_utf8(bytes)
        .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

    let bundle = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => InputBundle::from_json_str(&contents)?,
        _ => InputBundle::from_toml_str(&contents)?,
    };

    Ok(LoadedInput {
        bundle,
        path: path.to_path_buf(),
        digest,
    })
}
