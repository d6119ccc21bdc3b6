//! Domain models

pub mod client_identity;
pub mod rest_client_config;
pub mod settings;

pub use client_identity::{ClientIdentity, ClientRegistry, ClientType, RestClient};
pub use rest_client_config::{
    ClientProperty, ParseQueryParamStyleError, QueryParamStyle, RestClientConfig,
};
pub use settings::{LoggingSettings, ResolverSettings, Settings};
