//! `key=value` properties file source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::ConfigSource;

/// Default ordinal of a properties file, below environment variables.
pub const PROPERTIES_ORDINAL: i32 = 250;

/// Configuration source backed by a parsed properties document.
#[derive(Debug, Clone)]
pub struct PropertiesSource {
    name: String,
    ordinal: i32,
    properties: BTreeMap<String, String>,
}

impl PropertiesSource {
    /// Parse properties from an in-memory document.
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            ordinal: PROPERTIES_ORDINAL,
            properties: parse_properties(content),
        }
    }

    /// Read and parse a UTF-8 properties file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let source = Self::parse(format!("PropertiesSource[{}]", path.display()), &content);
        debug!(
            path = %path.display(),
            properties = source.properties.len(),
            "loaded properties file"
        );
        Ok(source)
    }

    /// Override the default ordinal.
    #[must_use]
    pub fn with_ordinal(mut self, ordinal: i32) -> Self {
        self.ordinal = ordinal;
        self
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the document defined no property.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ConfigSource for PropertiesSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn ordinal(&self) -> i32 {
        self.ordinal
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn property_names(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}

/// Parse a properties document into a key/value map.
///
/// Supports `#` and `!` comments, `=`, `:` or whitespace separators,
/// backslash line continuations and the usual escape sequences.
/// When a key repeats, the last value wins.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    for logical in logical_lines(content) {
        let (key, value) = split_key_value(&logical);
        properties.insert(unescape(key), unescape(value));
    }
    properties
}

/// Join continuation lines and drop blanks and comments.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let continuing = current.is_some();
        let line = raw.trim_start();

        if !continuing && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        let (body, continues) = strip_continuation(line);
        let mut buf = current.take().unwrap_or_default();
        buf.push_str(body);

        if continues {
            current = Some(buf);
        } else if !buf.is_empty() {
            lines.push(buf);
        }
    }

    if let Some(buf) = current.filter(|b| !b.is_empty()) {
        lines.push(buf);
    }
    lines
}

/// A line continues when it ends in an odd number of backslashes.
fn strip_continuation(line: &str) -> (&str, bool) {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        (&line[..line.len() - 1], true)
    } else {
        (line, false)
    }
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\u{c}']);
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    (key, rest.trim_start_matches([' ', '\t', '\u{c}']))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match hex_code(&hex) {
                    Some(high @ 0xD800..=0xDBFF) => {
                        // A high surrogate only decodes together with a following `\uDC00..\uDFFF`
                        let mut ahead = chars.clone();
                        let low = if ahead.next() == Some('\\') && ahead.next() == Some('u') {
                            let hex: String = ahead.by_ref().take(4).collect();
                            hex_code(&hex).filter(|low| (0xDC00..=0xDFFF).contains(low))
                        } else {
                            None
                        };
                        match low.and_then(|low| {
                            char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                        }) {
                            Some(decoded) => {
                                out.push(decoded);
                                chars = ahead;
                            }
                            None => keep_escape(&mut out, &hex),
                        }
                    }
                    Some(code) => match char::from_u32(code) {
                        Some(decoded) => out.push(decoded),
                        None => keep_escape(&mut out, &hex),
                    },
                    None => keep_escape(&mut out, &hex),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Exactly four hex digits; `from_str_radix` alone would also take a sign.
fn hex_code(hex: &str) -> Option<u32> {
    if hex.len() == 4 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}

/// Malformed `\u` escapes are kept literally.
fn keep_escape(out: &mut String, hex: &str) {
    out.push_str("\\u");
    out.push_str(hex);
}
