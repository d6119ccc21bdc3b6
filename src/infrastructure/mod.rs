//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Configuration sources and the layered store
//! - Tool settings loading
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod settings;
