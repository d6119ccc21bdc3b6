//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber with JSON or
//! human readable output.

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
