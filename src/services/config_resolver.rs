//! Resolution of REST client configuration records.
//!
//! A client is identified either by a logical name (`test-client`) or by its
//! interface type. The identity is turned into an ordered list of key
//! prefixes; for every property the first prefix holding a value wins, so
//! properties fall back independently of one another.
//!
//! For a client named `n` under the root `quarkus.rest-client`:
//!
//! 1. `quarkus.rest-client."n".<property>`
//! 2. `quarkus.rest-client.n.<property>`
//! 3. `n/mp-rest/<legacyProperty>`
//!
//! For a type `org.acme.Api` with config key `api`:
//!
//! 1. `quarkus.rest-client."org.acme.Api".<property>`
//! 2. `quarkus.rest-client."api".<property>` and `quarkus.rest-client.api.<property>`
//! 3. `quarkus.rest-client.Api.<property>`
//! 4. `org.acme.Api/mp-rest/<legacyProperty>`

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{
    ClientIdentity, ClientProperty, ClientRegistry, ClientType, RestClient, RestClientConfig,
};
use crate::domain::models::settings::default_root_prefix;
use crate::domain::ports::ConfigValue;
use crate::infrastructure::config::ConfigStore;

/// One place a property may be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Candidate {
    /// `<root>.<segment>.<property-name>`
    Namespaced(String),
    /// `<client>/mp-rest/<legacyName>`
    Legacy(String),
}

impl Candidate {
    fn key(&self, root: &str, property: ClientProperty) -> String {
        match self {
            Self::Namespaced(segment) => {
                format!("{root}.{segment}.{}", property.property_name())
            }
            Self::Legacy(client) => format!("{client}/mp-rest/{}", property.legacy_name()),
        }
    }
}

/// Resolves [`RestClientConfig`] records from a [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    store: Arc<ConfigStore>,
    registry: ClientRegistry,
    root_prefix: String,
}

impl ConfigResolver {
    /// Resolver over `store` with the default root prefix and no registry.
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            registry: ClientRegistry::default(),
            root_prefix: default_root_prefix(),
        }
    }

    /// Use `registry` to map client types to config keys.
    #[must_use]
    pub fn with_registry(mut self, registry: ClientRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the `quarkus.rest-client` namespace.
    #[must_use]
    pub fn with_root_prefix(mut self, root_prefix: impl Into<String>) -> Self {
        self.root_prefix = root_prefix.into();
        self
    }

    /// Namespace the client keys live under.
    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    /// The backing store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Resolve the configuration of `identity`.
    ///
    /// Missing properties are left as `None`. A value that cannot be
    /// converted to its property's type fails the whole resolution with
    /// [`ConfigError::InvalidValue`].
    #[instrument(skip(self, identity), fields(client = %identity))]
    pub fn resolve(&self, identity: &ClientIdentity) -> ConfigResult<RestClientConfig> {
        if identity.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }

        let candidates = self.candidates(identity);
        let config = RestClientConfig {
            url: self.property(&candidates, ClientProperty::Url)?,
            uri: self.property(&candidates, ClientProperty::Uri)?,
            scope: self.property(&candidates, ClientProperty::Scope)?,
            providers: self.property(&candidates, ClientProperty::Providers)?,
            connect_timeout: self.property(&candidates, ClientProperty::ConnectTimeout)?,
            read_timeout: self.property(&candidates, ClientProperty::ReadTimeout)?,
            follow_redirects: self.property(&candidates, ClientProperty::FollowRedirects)?,
            proxy_address: self.property(&candidates, ClientProperty::ProxyAddress)?,
            query_param_style: self.property(&candidates, ClientProperty::QueryParamStyle)?,
            hostname_verifier: self.property(&candidates, ClientProperty::HostnameVerifier)?,
            connection_ttl: self.property(&candidates, ClientProperty::ConnectionTtl)?,
            connection_pool_size: self.property(&candidates, ClientProperty::ConnectionPoolSize)?,
        };

        debug!(
            resolved = ClientProperty::ALL
                .iter()
                .filter(|p| config.display_value(**p).is_some())
                .count(),
            "resolved rest client configuration"
        );
        Ok(config)
    }

    /// Resolve by logical client name.
    pub fn resolve_name(&self, name: &str) -> ConfigResult<RestClientConfig> {
        self.resolve(&ClientIdentity::Name(name.to_string()))
    }

    /// Resolve by client interface type.
    pub fn resolve_type(&self, client: &ClientType) -> ConfigResult<RestClientConfig> {
        self.resolve(&ClientIdentity::Type(client.clone()))
    }

    /// Resolve a [`RestClient`] implementor.
    pub fn resolve_client<T: RestClient>(&self) -> ConfigResult<RestClientConfig> {
        self.resolve_type(&ClientType::of::<T>())
    }

    /// Every key consulted for `property`, in lookup order.
    pub fn candidate_keys(&self, identity: &ClientIdentity, property: ClientProperty) -> Vec<String> {
        self.candidates(identity)
            .iter()
            .map(|c| c.key(&self.root_prefix, property))
            .collect()
    }

    fn candidates(&self, identity: &ClientIdentity) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        match identity {
            ClientIdentity::Name(name) => {
                push_config_key(&mut candidates, name);
                candidates.push(Candidate::Legacy(name.clone()));
            }
            ClientIdentity::Type(client) => {
                let type_name = client.type_name();
                candidates.push(Candidate::Namespaced(quote(type_name)));

                let config_key = self
                    .registry
                    .alias_for(type_name)
                    .or_else(|| client.config_key());
                if let Some(config_key) = config_key {
                    push_config_key(&mut candidates, config_key);
                }

                let simple = Candidate::Namespaced(client.simple_name().to_string());
                if !candidates.contains(&simple) {
                    candidates.push(simple);
                }
                candidates.push(Candidate::Legacy(type_name.to_string()));
            }
        }
        candidates
    }

    /// Key that supplies `property` for `identity`, or `None` when no
    /// candidate key holds a value.
    pub fn source_key(
        &self,
        identity: &ClientIdentity,
        property: ClientProperty,
    ) -> ConfigResult<Option<String>> {
        Ok(self
            .lookup(&self.candidates(identity), property)?
            .map(|(key, _)| key))
    }

    fn property<T: ConfigValue>(
        &self,
        candidates: &[Candidate],
        property: ClientProperty,
    ) -> ConfigResult<Option<T>> {
        self.lookup(candidates, property)?
            .map(|(key, raw)| T::coerce(&key, &raw))
            .transpose()
    }

    /// First candidate key with a non-empty expanded value, and that value.
    fn lookup(
        &self,
        candidates: &[Candidate],
        property: ClientProperty,
    ) -> ConfigResult<Option<(String, String)>> {
        for candidate in candidates {
            let key = candidate.key(&self.root_prefix, property);
            if let Some(value) = self.store.get_value(&key)? {
                return Ok(Some((key, value)));
            }
        }
        Ok(None)
    }
}

/// Quoted and bare forms of a config key; a key containing dots is only
/// addressable quoted.
fn push_config_key(candidates: &mut Vec<Candidate>, config_key: &str) {
    let quoted = Candidate::Namespaced(quote(config_key));
    if !candidates.contains(&quoted) {
        candidates.push(quoted);
    }
    if !config_key.contains('.') {
        candidates.push(Candidate::Namespaced(config_key.to_string()));
    }
}

fn quote(segment: &str) -> String {
    format!("\"{segment}\"")
}
