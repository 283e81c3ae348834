//! Query string assembly.
//!
//! The first parameter is introduced with `?`, every later one with `&`.
//! Absent values are skipped without consuming the delimiter.
//!
//! Besides the alphanumerics and `-_.~`, the marks `!*'()` stay literal, so
//! wildcard names such as `PGM*` go out unescaped.

use std::fmt;

use serde::Serialize;

/// Marks `urlencoding` escapes that are sent literally.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode one query component.
fn encode_component(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, literal) in COMPONENT_SAFE {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, literal);
        }
    }
    encoded
}

/// A REST resource path and its encoded query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRequest {
    /// Path relative to the API base path, e.g. `/region/stop`.
    pub path: String,
    /// Encoded query string including its leading `?`, or empty.
    pub query: String,
}

impl fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path, self.query)
    }
}

/// Incremental builder for [`ResourceRequest`] query strings.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    query: String,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(&mut self, key: &str) {
        self.query.push(if self.query.is_empty() { '?' } else { '&' });
        self.query.push_str(key);
        self.query.push('=');
    }

    /// Append a scalar value, percent-encoded.
    pub fn scalar(&mut self, key: &str, value: &str) -> &mut Self {
        self.key(key);
        self.query.push_str(&encode_component(value));
        self
    }

    /// Append an optional scalar; `None` emits nothing.
    pub fn opt_scalar(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.scalar(key, value);
        }
        self
    }

    /// Append a list with each element encoded on its own and joined by a
    /// literal comma. An empty list emits nothing.
    pub fn list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        self.list_always(key, values)
    }

    /// Like [`Self::list`], but an empty list still emits `key=`.
    pub fn list_always<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        self.key(key);
        let encoded = values
            .iter()
            .map(|value| encode_component(value.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        self.query.push_str(&encoded);
        self
    }

    /// Append a list joined by commas and then encoded as one value, so the
    /// separators appear as `%2C`.
    pub fn joined<T: ToString>(&mut self, key: &str, values: &[T]) -> &mut Self {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.scalar(key, &joined)
    }

    /// Finish the query and attach it to `path`.
    #[must_use]
    pub fn build(self, path: impl Into<String>) -> ResourceRequest {
        ResourceRequest {
            path: path.into(),
            query: self.query,
        }
    }
}
