//! Request body representation.
//!
//! The body of a request message is decoded according to the first value of its
//! `Content-Type` header:
//!
//! - `multipart/form-data` → [`Body::FormData`]
//! - `application/x-www-form-urlencoded` → [`Body::UrlEncoded`]
//! - `application/json` → [`Body::Json`], kept verbatim
//! - anything else, or no `Content-Type` at all → [`Body::Plain`], kept verbatim

use mime::Mime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Body {
    FormData { boundary: String, params: Vec<FormDataParam> },
    UrlEncoded { params: Vec<UrlEncodedParam> },
    Json { raw: String },
    Plain { raw: String },
}

impl Body {
    /// Returns the MIME type this body was decoded as, `None` for [`Body::Plain`]
    /// since plain bodies are produced for any unknown or missing content type.
    pub fn content_type(&self) -> Option<Mime> {
        match self {
            Body::FormData { .. } => Some(mime::MULTIPART_FORM_DATA),
            Body::UrlEncoded { .. } => Some(mime::APPLICATION_WWW_FORM_URLENCODED),
            Body::Json { .. } => Some(mime::APPLICATION_JSON),
            Body::Plain { .. } => None,
        }
    }

    /// Returns the unparsed text of json and plain bodies.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Body::Json { raw } | Body::Plain { raw } => Some(raw),
            Body::FormData { .. } | Body::UrlEncoded { .. } => None,
        }
    }
}

/// A named part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDataParam {
    name: String,
    value: String,
}

impl FormDataParam {
    pub fn new<S: Into<String>>(name: S, value: S) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A `name=value` pair of an `application/x-www-form-urlencoded` body.
///
/// Neither side is percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEncodedParam {
    name: String,
    value: String,
}

impl UrlEncodedParam {
    pub fn new<S: Into<String>>(name: S, value: S) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
