//! Port trait definitions (Hexagonal Architecture)
//!
//! - `ConfigSource`: a read-only key/value provider backing the config store
//! - `ConfigValue`: typed coercion of raw configuration strings

pub mod config_source;

pub use config_source::{ConfigSource, ConfigValue};
