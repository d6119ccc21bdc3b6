//! Tool settings
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Validation

pub mod loader;

pub use loader::{SettingsError, SettingsLoader};
