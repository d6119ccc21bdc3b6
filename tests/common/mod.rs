//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use restclient_config::{ConfigResolver, ConfigStore, PropertiesSource};
use tempfile::NamedTempFile;

/// Path to the shared `application.properties` fixture
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/application.properties")
}

/// Store holding only the shared fixture
#[allow(dead_code)]
pub fn fixture_store() -> ConfigStore {
    let source = PropertiesSource::from_file(fixture_path()).expect("Failed to load fixture");
    ConfigStore::builder().with_source(source).build()
}

/// Resolver over the shared fixture
#[allow(dead_code)]
pub fn fixture_resolver() -> ConfigResolver {
    ConfigResolver::new(Arc::new(fixture_store()))
}

/// Resolver over an inline properties document
#[allow(dead_code)]
pub fn resolver_for(content: &str) -> ConfigResolver {
    let store = ConfigStore::builder()
        .with_source(PropertiesSource::parse("inline", content))
        .build();
    ConfigResolver::new(Arc::new(store))
}

/// Write `content` to a temporary properties file
#[allow(dead_code)]
pub fn temp_properties(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write properties");
    file.flush().expect("Failed to flush properties");
    file
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
