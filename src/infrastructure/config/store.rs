//! Layered, read-only configuration store.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::{ConfigSource, ConfigValue};

const MAX_EXPANSION_DEPTH: usize = 32;

/// Expressions evaluated per top-level lookup, bounding fan-out such as
/// `a=${b}${b}`, `b=${c}${c}`, ...
const MAX_EXPANSIONS: usize = 4096;

/// Ordered stack of [`ConfigSource`]s.
///
/// For each key the highest-ordinal source defining it wins; an empty value
/// counts as absent. Values may reference other keys with `${key}` or
/// `${key:default}`, and `$${` produces a literal `${`.
#[derive(Clone)]
pub struct ConfigStore {
    sources: Vec<Arc<dyn ConfigSource>>,
    expand_expressions: bool,
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field(
                "sources",
                &self
                    .sources
                    .iter()
                    .map(|s| format!("{}({})", s.name(), s.ordinal()))
                    .collect::<Vec<_>>(),
            )
            .field("expand_expressions", &self.expand_expressions)
            .finish()
    }
}

/// Builder for [`ConfigStore`]
pub struct ConfigStoreBuilder {
    sources: Vec<Arc<dyn ConfigSource>>,
    expand_expressions: bool,
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            expand_expressions: true,
        }
    }
}

impl ConfigStoreBuilder {
    /// Add a source.
    #[must_use]
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Add a source shared with other stores.
    #[must_use]
    pub fn with_shared_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Enable or disable `${...}` expansion (enabled by default).
    #[must_use]
    pub fn expand_expressions(mut self, enabled: bool) -> Self {
        self.expand_expressions = enabled;
        self
    }

    /// Order the sources by descending ordinal and freeze the store.
    pub fn build(mut self) -> ConfigStore {
        // Stable: among equal ordinals the source added first wins
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.ordinal()));
        ConfigStore {
            sources: self.sources,
            expand_expressions: self.expand_expressions,
        }
    }
}

impl ConfigStore {
    /// Start an empty store.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::default()
    }

    /// Sources in lookup order.
    pub fn sources(&self) -> impl Iterator<Item = &dyn ConfigSource> {
        self.sources.iter().map(|s| &**s)
    }

    /// Raw value of `key` from the winning source, without expansion.
    pub fn get_raw_value(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let value = source.get_value(key)?;
            trace!(key, source = source.name(), "property found");
            Some(value)
        })
    }

    /// Expanded value of `key`; `None` when absent or empty.
    pub fn get_value(&self, key: &str) -> ConfigResult<Option<String>> {
        let mut budget = MAX_EXPANSIONS;
        self.lookup(key, 0, &mut budget)
    }

    /// Value of `key` converted to `T`; `None` when absent or empty.
    pub fn get_optional_value<T: ConfigValue>(&self, key: &str) -> ConfigResult<Option<T>> {
        self.get_value(key)?
            .map(|raw| T::coerce(key, &raw))
            .transpose()
    }

    /// Whether [`get_value`](Self::get_value) yields a value for `key`.
    /// A value that fails to expand counts as absent.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.get_value(key), Ok(Some(_)))
    }

    /// Union of all keys over every source.
    pub fn property_names(&self) -> BTreeSet<String> {
        self.sources
            .iter()
            .flat_map(|source| source.property_names())
            .collect()
    }

    fn lookup(&self, key: &str, depth: usize, budget: &mut usize) -> ConfigResult<Option<String>> {
        let Some(raw) = self.get_raw_value(key) else {
            return Ok(None);
        };
        let value = if self.expand_expressions {
            self.expand(key, &raw, depth, budget)?
        } else {
            raw
        };
        Ok(Some(value).filter(|v| !v.is_empty()))
    }

    fn expand(
        &self,
        key: &str,
        raw: &str,
        depth: usize,
        budget: &mut usize,
    ) -> ConfigResult<String> {
        if depth > MAX_EXPANSION_DEPTH {
            return Err(ConfigError::ExpressionDepth(key.to_string()));
        }

        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(start) = rest.find('$') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(after) = tail.strip_prefix("$${") {
                out.push_str("${");
                rest = after;
                continue;
            }
            let Some(body) = tail.strip_prefix("${") else {
                out.push('$');
                rest = &tail[1..];
                continue;
            };
            let Some(end) = find_at_top_level(body, '}') else {
                // Unterminated expressions are left as written
                out.push_str(tail);
                rest = "";
                break;
            };

            out.push_str(&self.evaluate(key, &body[..end], depth, budget)?);
            rest = &body[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn evaluate(
        &self,
        key: &str,
        expression: &str,
        depth: usize,
        budget: &mut usize,
    ) -> ConfigResult<String> {
        if *budget == 0 {
            return Err(ConfigError::ExpressionDepth(key.to_string()));
        }
        *budget -= 1;

        let (name, default) = match find_at_top_level(expression, ':') {
            Some(colon) => (&expression[..colon], Some(&expression[colon + 1..])),
            None => (expression, None),
        };
        let name = self.expand(key, name, depth + 1, budget)?;

        if let Some(value) = self.lookup(&name, depth + 1, budget)? {
            return Ok(value);
        }
        match default {
            Some(default) => self.expand(key, default, depth + 1, budget),
            None => Err(ConfigError::UnresolvedExpression {
                key: key.to_string(),
                expression: expression.to_string(),
            }),
        }
    }
}

/// Byte offset of the first `target` not nested inside another `${...}`.
fn find_at_top_level(text: &str, target: char) -> Option<usize> {
    let mut nesting = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == '$' && chars.peek().is_some_and(|(_, next)| *next == '{') {
            chars.next();
            nesting += 1;
        } else if c == '}' && nesting > 0 {
            nesting -= 1;
        } else if c == target && nesting == 0 {
            return Some(i);
        }
    }
    None
}
