//! Environment variable source.

use std::collections::HashMap;

use crate::domain::ports::ConfigSource;

/// Default ordinal of the environment, above property files.
pub const ENV_ORDINAL: i32 = 300;

/// Configuration source over environment variables.
///
/// A property key `k` is looked up as:
/// 1. `k` verbatim
/// 2. `k` with every non-alphanumeric character replaced by `_`
/// 3. the same, uppercased
///
/// so `quarkus.rest-client.test-client.url` is matched by
/// `QUARKUS_REST_CLIENT_TEST_CLIENT_URL`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    vars: HashMap<String, String>,
    ordinal: i32,
}

impl EnvSource {
    /// Snapshot of the current process environment; non-UTF-8 entries are skipped.
    pub fn from_process_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Source over an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ordinal: ENV_ORDINAL,
        }
    }

    /// Override the default ordinal.
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: i32) -> Self {
        self.ordinal = ordinal;
        self
    }
}

/// `foo.bar-baz` → `foo_bar_baz`
pub fn env_name(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "EnvSource"
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn get_value(&self, key: &str) -> Option<String> {
        if let Some(value) = self.vars.get(key) {
            return Some(value.clone());
        }
        let sanitized = env_name(key);
        self.vars
            .get(&sanitized)
            .or_else(|| self.vars.get(&sanitized.to_ascii_uppercase()))
            .cloned()
    }

    fn property_names(&self) -> Vec<String> {
        self.vars.keys().cloned().collect()
    }
}
