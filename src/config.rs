use crate::compose::ComposeBinary;
use crate::errors::{ComposeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = ".local-compose.yml";

/// Environment variable that overrides the configured executable
pub const EXECUTABLE_ENV: &str = "LOCAL_COMPOSE_EXECUTABLE";

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// e.g. "docker-compose" or "docker compose"; detected when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
    #[serde(default)]
    pub compose_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Config {
    /// Load config from .local-compose.yml in `dir`, then apply env overrides
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::load_file(dir)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_file(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            // No config file, return defaults
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_yml::from_str(&content)
            .map_err(|e| ComposeError::ConfigError(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(executable) = std::env::var(EXECUTABLE_ENV) {
            if !executable.trim().is_empty() {
                self.executable = Some(executable);
            }
        }
    }

    /// Configured compose binary, or whichever is installed
    pub fn binary(&self) -> Result<ComposeBinary> {
        match &self.executable {
            Some(executable) => executable.parse(),
            None => Ok(ComposeBinary::detect()),
        }
    }
}
