//! Domain layer: configuration record, client identities and ports.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigError, ConfigResult};
