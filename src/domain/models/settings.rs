//! Settings of the command-line tool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings of the `restclient-config` tool itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Resolution settings
    #[serde(default)]
    pub resolver: ResolverSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where client configuration is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolverSettings {
    /// Namespace under which client keys live
    #[serde(default = "default_root_prefix")]
    pub root_prefix: String,

    /// Property files loaded when none are given on the command line
    #[serde(default = "default_property_files")]
    pub property_files: Vec<PathBuf>,

    /// Layer environment variables above the property files
    #[serde(default = "default_true")]
    pub include_env: bool,
}

/// `quarkus.rest-client`
pub fn default_root_prefix() -> String {
    "quarkus.rest-client".to_string()
}

fn default_property_files() -> Vec<PathBuf> {
    vec![PathBuf::from("application.properties")]
}

const fn default_true() -> bool {
    true
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            root_prefix: default_root_prefix(),
            property_files: default_property_files(),
            include_env: default_true(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
