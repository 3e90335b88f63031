//! Configuration loading and merging.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::output::OutputFormat;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown output format '{0}' (expected lines, json, or joined)")]
    Format(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format: "lines", "json", or "joined".
    pub format: Option<String>,

    /// Regex patterns a token must match (any of) to be kept.
    /// Empty means keep everything.
    pub keep: Vec<String>,

    /// Regex patterns that remove matching tokens. Wins over `keep`.
    pub drop: Vec<String>,

    /// Audit logging settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Compiled configuration with pre-built regexes.
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled keep patterns.
    pub keep_patterns: Vec<Regex>,
    /// Compiled drop patterns.
    pub drop_patterns: Vec<Regex>,
    /// Resolved output format.
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Load user config (~/.config/wordsplit.toml)
        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        // Load and merge project config (.wordsplit.toml in cwd)
        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Load user-level config from ~/.config/wordsplit.toml
    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        let path = Self::user_config_path();
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                return Ok(Some(toml::from_str(&content)?));
            }
        }
        Ok(None)
    }

    /// Load project-level config from .wordsplit.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".wordsplit.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(toml::from_str(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects WORDSPLIT_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        // Check for override env var first (useful for testing)
        if let Ok(path) = std::env::var("WORDSPLIT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("wordsplit.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        // Extend arrays
        self.keep.extend(other.keep);
        self.drop.extend(other.drop);

        // Override scalars if set in project config
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Compile all regex patterns and resolve the output format.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let keep_patterns = self
            .keep
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::Regex {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let drop_patterns = self
            .drop
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::Regex {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let format = match self.format.as_deref() {
            None => OutputFormat::Lines,
            Some(name) => OutputFormat::parse(name)
                .ok_or_else(|| ConfigError::Format(name.to_string()))?,
        };

        Ok(CompiledConfig {
            raw: self,
            keep_patterns,
            drop_patterns,
            format,
        })
    }
}

impl CompiledConfig {
    /// Check whether a token survives the keep/drop filters.
    pub fn retains(&self, token: &str) -> bool {
        if self.drop_patterns.iter().any(|re| re.is_match(token)) {
            return false;
        }
        if self.keep_patterns.is_empty() {
            return true;
        }
        self.keep_patterns.iter().any(|re| re.is_match(token))
    }
}
