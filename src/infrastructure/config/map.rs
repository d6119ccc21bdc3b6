//! In-memory configuration source.

use std::collections::BTreeMap;

use crate::domain::ports::ConfigSource;

/// Default ordinal of a map source, below property files.
pub const MAP_ORDINAL: i32 = 100;

/// In-memory configuration source, handy for defaults and tests.
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    ordinal: i32,
    values: BTreeMap<String, String>,
}

impl MapSource {
    /// Empty source called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ordinal: MAP_ORDINAL,
            values: BTreeMap::new(),
        }
    }

    /// Add or replace one value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Override the default ordinal.
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: i32) -> Self {
        self.ordinal = ordinal;
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new("MapSource"), |source, (k, v)| source.with_value(k, v))
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn property_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
