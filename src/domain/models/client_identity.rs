//! Ways of naming a REST client: logical name, interface type, registry alias.

use std::collections::HashMap;
use std::fmt;

/// Type-level registration of a REST client interface.
///
/// Implement this on a marker type to resolve its configuration with
/// `ConfigResolver::resolve_client::<T>()`.
///
/// ```
/// use restclient_config::domain::models::RestClient;
///
/// struct GreetingClient;
///
/// impl RestClient for GreetingClient {
///     const TYPE_NAME: &'static str = "org.acme.GreetingClient";
///     const CONFIG_KEY: Option<&'static str> = Some("greeting-api");
/// }
/// ```
pub trait RestClient {
    /// Fully-qualified name of the client interface.
    const TYPE_NAME: &'static str;

    /// Short configuration key declared for the client, if any.
    const CONFIG_KEY: Option<&'static str> = None;
}

/// Descriptor of a client interface type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientType {
    type_name: String,
    config_key: Option<String>,
}

impl ClientType {
    /// Type without a declared config key.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            config_key: None,
        }
    }

    /// Attach the config key declared by the client itself.
    #[must_use]
    pub fn with_config_key(mut self, config_key: impl Into<String>) -> Self {
        self.config_key = Some(config_key.into()).filter(|k: &String| !k.is_empty());
        self
    }

    /// Descriptor of a [`RestClient`] implementor.
    pub fn of<T: RestClient>() -> Self {
        let client = Self::new(T::TYPE_NAME);
        match T::CONFIG_KEY {
            Some(key) => client.with_config_key(key),
            None => client,
        }
    }

    /// Fully-qualified name, e.g. `org.acme.GreetingClient`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Config key declared by the client, if any.
    pub fn config_key(&self) -> Option<&str> {
        self.config_key.as_deref()
    }

    /// Last path segment of the type name; both `.` and `::` separate segments.
    pub fn simple_name(&self) -> &str {
        let name = self.type_name.rsplit("::").next().unwrap_or(&self.type_name);
        name.rsplit('.').next().unwrap_or(name)
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

/// What a caller asks the resolver to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientIdentity {
    /// Logical config key, e.g. `test-client`.
    Name(String),
    /// Client interface type.
    Type(ClientType),
}

impl ClientIdentity {
    /// Whether the name (or type name) is blank.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Name(name) => name.trim().is_empty(),
            Self::Type(client) => client.type_name().trim().is_empty(),
        }
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Type(client) => write!(f, "type {client}"),
        }
    }
}

impl From<&str> for ClientIdentity {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ClientIdentity {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<ClientType> for ClientIdentity {
    fn from(client: ClientType) -> Self {
        Self::Type(client)
    }
}

/// Explicit table of type name → config key aliases.
///
/// An alias registered here takes precedence over the key a `ClientType`
/// declares itself.
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    aliases: HashMap<String, String>,
}

impl ClientRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `config_key` as the alias of `type_name`, replacing any previous one.
    pub fn register(&mut self, type_name: impl Into<String>, config_key: impl Into<String>) {
        self.aliases.insert(type_name.into(), config_key.into());
    }

    /// Register `config_key` for a [`RestClient`] implementor.
    pub fn register_client<T: RestClient>(&mut self, config_key: impl Into<String>) {
        self.register(T::TYPE_NAME, config_key);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, type_name: impl Into<String>, config_key: impl Into<String>) -> Self {
        self.register(type_name, config_key);
        self
    }

    /// Alias registered for `type_name`.
    pub fn alias_for(&self, type_name: &str) -> Option<&str> {
        self.aliases.get(type_name).map(String::as_str)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether no alias is registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GreetingClient;

    impl RestClient for GreetingClient {
        const TYPE_NAME: &'static str = "org.acme.rest.GreetingClient";
        const CONFIG_KEY: Option<&'static str> = Some("greeting-api");
    }

    struct PlainClient;

    impl RestClient for PlainClient {
        const TYPE_NAME: &'static str = "billing::clients::InvoiceClient";
    }

    #[test]
    fn test_simple_name_dotted() {
        assert_eq!(ClientType::of::<GreetingClient>().simple_name(), "GreetingClient");
    }

    #[test]
    fn test_simple_name_rust_path() {
        assert_eq!(ClientType::of::<PlainClient>().simple_name(), "InvoiceClient");
    }

    #[test]
    fn test_simple_name_without_separator() {
        assert_eq!(ClientType::new("Standalone").simple_name(), "Standalone");
    }

    #[test]
    fn test_declared_config_key() {
        assert_eq!(ClientType::of::<GreetingClient>().config_key(), Some("greeting-api"));
        assert_eq!(ClientType::of::<PlainClient>().config_key(), None);
    }

    #[test]
    fn test_empty_config_key_is_ignored() {
        assert_eq!(ClientType::new("a.B").with_config_key("").config_key(), None);
    }

    #[test]
    fn test_registry_replaces_alias() {
        let mut registry = ClientRegistry::new();
        registry.register_client::<PlainClient>("invoices");
        registry.register("billing::clients::InvoiceClient", "invoices-v2");
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.alias_for("billing::clients::InvoiceClient"),
            Some("invoices-v2")
        );
        assert_eq!(registry.alias_for("unknown"), None);
    }

    #[test]
    fn test_identity_emptiness() {
        assert!(ClientIdentity::from("  ").is_empty());
        assert!(ClientIdentity::from(ClientType::new("")).is_empty());
        assert!(!ClientIdentity::from("test-client").is_empty());
    }
}
