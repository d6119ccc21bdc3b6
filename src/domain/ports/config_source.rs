//! Ports between the resolver and configuration storage.

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::QueryParamStyle;

/// Read-only provider of raw configuration values.
///
/// Sources are stacked inside a `ConfigStore`; the one with the highest
/// [`ordinal`](ConfigSource::ordinal) answers first.
pub trait ConfigSource: Send + Sync {
    /// Human readable name used in logs.
    fn name(&self) -> &str;

    /// Priority of this source. Higher wins.
    fn ordinal(&self) -> i32;

    /// Look up the raw value stored under `key`.
    ///
    /// # Returns
    /// * `Some(value)` if the source defines the key (possibly empty)
    /// * `None` if the key is unknown to this source
    fn get_value(&self, key: &str) -> Option<String>;

    /// All keys defined by this source.
    fn property_names(&self) -> Vec<String>;
}

/// Conversion from a raw configuration string into a typed value.
pub trait ConfigValue: Sized {
    /// Name of the target type, used in error messages.
    const EXPECTED: &'static str;

    /// Convert `raw`, returning `None` when the text is not a valid value.
    fn parse_value(raw: &str) -> Option<Self>;

    /// Convert `raw` read from `key`, mapping failures to
    /// [`ConfigError::InvalidValue`].
    fn coerce(key: &str, raw: &str) -> ConfigResult<Self> {
        Self::parse_value(raw).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: Self::EXPECTED,
        })
    }
}

impl ConfigValue for String {
    const EXPECTED: &'static str = "string";

    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl ConfigValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl ConfigValue for i32 {
    const EXPECTED: &'static str = "integer";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl ConfigValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn parse_value(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "on" => Some(true),
            "false" | "0" | "no" | "n" | "off" => Some(false),
            _ => None,
        }
    }
}

impl ConfigValue for QueryParamStyle {
    const EXPECTED: &'static str = "query param style (MULTI_PAIRS, COMMA_SEPARATED, ARRAY_PAIRS)";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(i64::coerce("k", "5000").unwrap(), 5000);
        assert_eq!(i32::coerce("k", " 10 ").unwrap(), 10);
    }

    #[test]
    fn test_integer_coercion_rejects_text() {
        let err = i64::coerce("a.connect-timeout", "fast").unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, expected } => {
                assert_eq!(key, "a.connect-timeout");
                assert_eq!(value, "fast");
                assert_eq!(expected, "integer");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_integers_accepted() {
        assert_eq!(i64::coerce("a.connect-timeout", "-1").unwrap(), -1);
        assert_eq!(i32::coerce("a.connection-ttl", "-1").unwrap(), -1);
    }

    #[test]
    fn test_int_range_enforced() {
        assert!(i32::coerce("a.connection-pool-size", "2147483648").is_err());
        assert_eq!(
            i64::coerce("a.read-timeout", "2147483648").unwrap(),
            2_147_483_648
        );
    }

    #[test]
    fn test_boolean_coercion() {
        assert!(bool::coerce("k", "true").unwrap());
        assert!(bool::coerce("k", "TRUE").unwrap());
        assert!(bool::coerce("k", "on").unwrap());
        assert!(!bool::coerce("k", "false").unwrap());
        assert!(!bool::coerce("k", "0").unwrap());
        assert!(bool::coerce("k", "maybe").is_err());
    }

    #[test]
    fn test_string_passthrough_keeps_whitespace() {
        assert_eq!(String::coerce("k", " a b ").unwrap(), " a b ");
    }

    #[test]
    fn test_query_param_style_is_case_sensitive() {
        assert_eq!(
            QueryParamStyle::coerce("k", "COMMA_SEPARATED").unwrap(),
            QueryParamStyle::CommaSeparated
        );
        assert!(QueryParamStyle::coerce("k", "comma_separated").is_err());
    }
}
