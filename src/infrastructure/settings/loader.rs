//! Settings loading and validation

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Settings;

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Blank root prefix, or one with a leading or trailing dot
    #[error("Invalid root prefix: '{0}'. Must be non-empty and must not start or end with '.'")]
    InvalidRootPrefix(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. restclient-config.yaml in the working directory (optional)
    /// 3. Environment variables (RESTCLIENT_* prefix, `__` for nesting)
    pub fn load() -> Result<Settings> {
        let settings: Settings = Self::figment(Yaml::file("restclient-config.yaml"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Settings> {
        let settings: Settings = Self::figment(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load settings from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    fn figment(file: figment::providers::Data<Yaml>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(file)
            .merge(Env::prefixed("RESTCLIENT_").split("__"))
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(SettingsError::InvalidLogFormat(
                settings.logging.format.clone(),
            ));
        }

        Self::validate_root_prefix(&settings.resolver.root_prefix)
    }

    /// Check a root prefix, whether configured or given on the command line
    pub fn validate_root_prefix(prefix: &str) -> Result<(), SettingsError> {
        if prefix.trim().is_empty() || prefix.starts_with('.') || prefix.ends_with('.') {
            return Err(SettingsError::InvalidRootPrefix(prefix.to_string()));
        }
        Ok(())
    }
}
