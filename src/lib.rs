//! restclient-config - REST client configuration resolution
//!
//! Resolves the configuration record of a REST client from a layered
//! key/value store, addressing the client either by a logical name or by its
//! interface type.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record, client identities,
//!   errors and the `ConfigSource` port
//! - **Service Layer** (`services`): the `ConfigResolver`
//! - **Infrastructure Layer** (`infrastructure`): properties/env/map sources,
//!   the layered store, tool settings and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use restclient_config::{ConfigResolver, ConfigStore, PropertiesSource, QueryParamStyle};
//!
//! let properties = PropertiesSource::parse(
//!     "application.properties",
//!     "quarkus.rest-client.test-client.url=http://localhost:8080\n\
//!      quarkus.rest-client.test-client.query-param-style=COMMA_SEPARATED\n",
//! );
//! let store = ConfigStore::builder().with_source(properties).build();
//! let resolver = ConfigResolver::new(Arc::new(store));
//!
//! let config = resolver.resolve_name("test-client").unwrap();
//! assert_eq!(config.url.as_deref(), Some("http://localhost:8080"));
//! assert_eq!(config.query_param_style, Some(QueryParamStyle::CommaSeparated));
//! assert_eq!(config.connect_timeout, None);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ConfigError, ConfigResult};
pub use domain::models::{
    ClientIdentity, ClientProperty, ClientRegistry, ClientType, QueryParamStyle, RestClient,
    RestClientConfig, Settings,
};
pub use domain::ports::{ConfigSource, ConfigValue};
pub use infrastructure::config::{ConfigStore, EnvSource, MapSource, PropertiesSource};
pub use infrastructure::settings::{SettingsError, SettingsLoader};
pub use services::ConfigResolver;
