//! The REST client configuration record and its property names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How multi-valued query parameters are encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryParamStyle {
    /// `foo=v1&foo=v2`
    MultiPairs,
    /// `foo=v1,v2`
    CommaSeparated,
    /// `foo[]=v1&foo[]=v2`
    ArrayPairs,
}

impl QueryParamStyle {
    /// Configuration spelling, e.g. `COMMA_SEPARATED`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiPairs => "MULTI_PAIRS",
            Self::CommaSeparated => "COMMA_SEPARATED",
            Self::ArrayPairs => "ARRAY_PAIRS",
        }
    }
}

impl fmt::Display for QueryParamStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`QueryParamStyle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid query param style: {0}")]
pub struct ParseQueryParamStyleError(String);

impl FromStr for QueryParamStyle {
    type Err = ParseQueryParamStyleError;

    // Exact match only; `comma_separated` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MULTI_PAIRS" => Ok(Self::MultiPairs),
            "COMMA_SEPARATED" => Ok(Self::CommaSeparated),
            "ARRAY_PAIRS" => Ok(Self::ArrayPairs),
            _ => Err(ParseQueryParamStyleError(s.to_string())),
        }
    }
}

/// The twelve settings a REST client reads from configuration.
///
/// Each variant knows its current property name (`connect-timeout`) and the
/// legacy MicroProfile name (`connectTimeout`) used under `<client>/mp-rest/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientProperty {
    /// `url`
    Url,
    /// `uri`
    Uri,
    /// `scope`
    Scope,
    /// `providers`
    Providers,
    /// `connect-timeout`
    ConnectTimeout,
    /// `read-timeout`
    ReadTimeout,
    /// `follow-redirects`
    FollowRedirects,
    /// `proxy-address`
    ProxyAddress,
    /// `query-param-style`
    QueryParamStyle,
    /// `hostname-verifier`
    HostnameVerifier,
    /// `connection-ttl`
    ConnectionTtl,
    /// `connection-pool-size`
    ConnectionPoolSize,
}

impl ClientProperty {
    /// Every property, in record order.
    pub const ALL: [Self; 12] = [
        Self::Url,
        Self::Uri,
        Self::Scope,
        Self::Providers,
        Self::ConnectTimeout,
        Self::ReadTimeout,
        Self::FollowRedirects,
        Self::ProxyAddress,
        Self::QueryParamStyle,
        Self::HostnameVerifier,
        Self::ConnectionTtl,
        Self::ConnectionPoolSize,
    ];

    /// Property name under `quarkus.rest-client.<client>.`
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Uri => "uri",
            Self::Scope => "scope",
            Self::Providers => "providers",
            Self::ConnectTimeout => "connect-timeout",
            Self::ReadTimeout => "read-timeout",
            Self::FollowRedirects => "follow-redirects",
            Self::ProxyAddress => "proxy-address",
            Self::QueryParamStyle => "query-param-style",
            Self::HostnameVerifier => "hostname-verifier",
            Self::ConnectionTtl => "connection-ttl",
            Self::ConnectionPoolSize => "connection-pool-size",
        }
    }

    /// Property name under `<client>/mp-rest/`
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Uri => "uri",
            Self::Scope => "scope",
            Self::Providers => "providers",
            Self::ConnectTimeout => "connectTimeout",
            Self::ReadTimeout => "readTimeout",
            Self::FollowRedirects => "followRedirects",
            Self::ProxyAddress => "proxyAddress",
            Self::QueryParamStyle => "queryParamStyle",
            Self::HostnameVerifier => "hostnameVerifier",
            Self::ConnectionTtl => "connectionTTL",
            Self::ConnectionPoolSize => "connectionPoolSize",
        }
    }
}

impl fmt::Display for ClientProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_name())
    }
}

/// Resolved configuration of one REST client.
///
/// A field is `Some` only when the backing store held a value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RestClientConfig {
    /// Base URL
    pub url: Option<String>,

    /// Base URI, used when `url` is not set
    pub uri: Option<String>,

    /// Scope name, e.g. `Singleton`
    pub scope: Option<String>,

    /// Provider class names, passed through verbatim
    pub providers: Option<String>,

    /// Connect timeout in milliseconds
    pub connect_timeout: Option<i64>,

    /// Read timeout in milliseconds
    pub read_timeout: Option<i64>,

    /// Whether redirects are followed automatically
    pub follow_redirects: Option<bool>,

    /// Proxy in `host:port` form
    pub proxy_address: Option<String>,

    /// Encoding of multi-valued query parameters
    pub query_param_style: Option<QueryParamStyle>,

    /// Hostname verifier class name
    pub hostname_verifier: Option<String>,

    /// Pooled connection time-to-live in milliseconds
    pub connection_ttl: Option<i32>,

    /// Maximum pooled connections
    pub connection_pool_size: Option<i32>,
}

impl RestClientConfig {
    /// Whether no property was resolved at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render a field as display text, `None` when unset.
    pub fn display_value(&self, property: ClientProperty) -> Option<String> {
        match property {
            ClientProperty::Url => self.url.clone(),
            ClientProperty::Uri => self.uri.clone(),
            ClientProperty::Scope => self.scope.clone(),
            ClientProperty::Providers => self.providers.clone(),
            ClientProperty::ConnectTimeout => self.connect_timeout.map(|v| v.to_string()),
            ClientProperty::ReadTimeout => self.read_timeout.map(|v| v.to_string()),
            ClientProperty::FollowRedirects => self.follow_redirects.map(|v| v.to_string()),
            ClientProperty::ProxyAddress => self.proxy_address.clone(),
            ClientProperty::QueryParamStyle => self.query_param_style.map(|v| v.to_string()),
            ClientProperty::HostnameVerifier => self.hostname_verifier.clone(),
            ClientProperty::ConnectionTtl => self.connection_ttl.map(|v| v.to_string()),
            ClientProperty::ConnectionPoolSize => self.connection_pool_size.map(|v| v.to_string()),
        }
    }
}
