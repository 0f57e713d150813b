//! Decoder for `multipart/form-data` bodies.
//!
//! The boundary comes from the `Content-Type` parameter string,
//! `boundary=[-A-Za-z0-9_]+`. Parts are separated by 23 dashes followed by the
//! boundary, the slice before the first separator and the one after the last are
//! dropped. Each remaining part must contain a disposition of the form
//!
//! ```text
//! Content-Disposition: form-data; name="[Name]"
//! ```
//!
//! and its value is what is left of the part once the disposition is removed and
//! surrounding whitespace is trimmed. Patterns are matched ignoring case.

use lazy_regex::{Lazy, Regex, lazy_regex};
use tracing::trace;

use crate::codec::Decode;
use crate::protocol::{FormDataParam, InvalidRequestError};

static BOUNDARY: Lazy<Regex> = lazy_regex!(r#"(?i)boundary=([-A-Za-z0-9_]+)"#);
static DISPOSITION: Lazy<Regex> = lazy_regex!(r#"(?i)Content-Disposition:\s*form-data;\s*name="[A-Za-z0-9_]+""#);
static NAME: Lazy<Regex> = lazy_regex!(r#"(?i)name="[A-Za-z0-9_]+""#);

/// Dashes preceding the boundary in every part separator.
const DELIMITER_DASHES: usize = 23;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormDataDecoder {
    boundary: String,
    delimiter: String,
}

impl FormDataDecoder {
    pub(crate) fn new<S: Into<String>>(boundary: S) -> Self {
        let boundary = boundary.into();
        let delimiter = format!("{}{boundary}", "-".repeat(DELIMITER_DASHES));
        Self { boundary, delimiter }
    }

    /// Creates the decoder for the boundary declared in a `Content-Type` parameter
    /// string such as `boundary=------11136253119209`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestError` if the parameters hold no non-empty boundary.
    pub(crate) fn from_params(params: &str) -> Result<Self, InvalidRequestError> {
        let boundary = parse_boundary(params).ok_or_else(|| InvalidRequestError::invalid_boundary(params))?;
        Ok(Self::new(boundary))
    }

    pub(crate) fn into_boundary(self) -> String {
        self.boundary
    }
}

impl Decode for FormDataDecoder {
    type Item = Vec<FormDataParam>;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let parts: Vec<&str> = src.split(self.delimiter.as_str()).collect();
        let parts = parts.get(1..parts.len().saturating_sub(1)).unwrap_or_default();

        trace!(boundary = %self.boundary, parts = parts.len(), "decoding multipart form data");

        parts.iter().map(|part| decode_part(part)).collect()
    }
}

fn decode_part(part: &str) -> Result<FormDataParam, InvalidRequestError> {
    let disposition = DISPOSITION.find(part).ok_or_else(|| InvalidRequestError::invalid_form_data_param(part))?;
    let name = parse_name(disposition.as_str()).ok_or_else(|| InvalidRequestError::invalid_form_data_param_name(part))?;

    let value = [&part[..disposition.start()], &part[disposition.end()..]].concat();

    Ok(FormDataParam::new(name.replace('"', ""), value.trim().to_string()))
}

fn parse_boundary(params: &str) -> Option<&str> {
    BOUNDARY.captures(params).and_then(|captures| captures.get(1)).map(|boundary| boundary.as_str())
}

/// Extracts the quoted name of a matched disposition, `name="Age"` yields `"Age"`.
fn parse_name(disposition: &str) -> Option<&str> {
    let name = NAME.find(disposition)?;

    let mut pieces = name.as_str().split('=');
    match (pieces.next(), pieces.next(), pieces.next()) {
        (Some(_), Some(quoted), None) => Some(quoted),
        _ => None,
    }
}
