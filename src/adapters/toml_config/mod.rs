// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::config::PipelineConfig;
use crate::domain::errors::*;

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "HLSPREP_CONFIG";

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hlsprep.toml";

/// Loads [`PipelineConfig`] following the precedence
/// explicit path > `HLSPREP_CONFIG` > `./hlsprep.toml` > defaults
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Resolve and load the configuration. Relative whisper.cpp paths are
    /// anchored at the directory of the running executable.
    pub fn load(explicit: Option<&Path>) -> Result<PipelineConfig, DomainError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let mut config =
            Self::load_with(explicit, env_path.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;

        match std::env::current_exe() {
            Ok(exe) => {
                if let Some(dir) = exe.parent() {
                    config.transcription.anchor_paths(dir);
                }
            }
            Err(e) => warn!("Cannot locate executable, whisper paths stay relative: {}", e),
        }
        Ok(config)
    }

    /// Resolve the configuration from explicit candidates
    pub fn load_with(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
        default_path: &Path,
    ) -> Result<PipelineConfig, DomainError> {
        let config = if let Some(path) = explicit.or(env_path) {
            Self::load_file(path)?
        } else if default_path.exists() {
            Self::load_file(default_path)?
        } else {
            info!("No configuration file found, using defaults");
            PipelineConfig::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load_file(path: &Path) -> Result<PipelineConfig, DomainError> {
        info!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Deserialize config from TOML string
    pub fn parse(toml_content: &str) -> Result<PipelineConfig, DomainError> {
        toml::from_str(toml_content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))
    }

    /// Serialize config to TOML string
    pub fn serialize(config: &PipelineConfig) -> Result<String, DomainError> {
        toml::to_string_pretty(config)
            .map_err(|e| DomainError::Config(format!("Failed to serialize config: {}", e)))
    }
}
