//! Header entries decoded from the header lines of a request message.
//!
//! A header line `Accept-Language: ru-RU,ru;q=0.8` becomes one [`Header`] named
//! `Accept-Language` with two [`HeaderValue`]s, the second one carrying the raw
//! parameter string `q=0.8`.

use serde::Serialize;

/// A single header line, split into its comma separated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    name: String,
    values: Vec<HeaderValue>,
}

impl Header {
    pub fn new<S: Into<String>>(name: S, values: Vec<HeaderValue>) -> Self {
        Self { name: name.into(), values }
    }

    /// Returns the header name, trimmed but otherwise as written in the message.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values in the order they appear on the header line.
    pub fn values(&self) -> &[HeaderValue] {
        &self.values
    }

    /// Returns the first value, the only one most headers have.
    pub fn first_value(&self) -> Option<&HeaderValue> {
        self.values.first()
    }

    /// Compares the header name ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// One comma separated segment of a header line.
///
/// `params` holds everything after the first `;` of the segment, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderValue {
    value: String,
    params: Option<String>,
}

impl HeaderValue {
    pub fn new<S: Into<String>>(value: S, params: Option<S>) -> Self {
        Self { value: value.into(), params: params.map(Into::into) }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }
}
