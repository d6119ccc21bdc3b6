//! Services built on the domain ports

pub mod config_resolver;

pub use config_resolver::ConfigResolver;
