//! Body decoding, selected by the first value of the `Content-Type` header.
//!
//! # Components
//!
//! - [`BodyDecoder`]: chooses the body representation
//! - [`FormDataDecoder`]: splits `multipart/form-data` bodies into named parts
//! - [`UrlEncodedDecoder`]: splits `application/x-www-form-urlencoded` bodies into pairs
//!
//! JSON and every other content type are kept verbatim.

mod form_data_decoder;
mod url_encoded_decoder;

use tracing::trace;

use crate::codec::Decode;
use crate::protocol::{Body, HeaderValue, InvalidRequestError};

pub(crate) use form_data_decoder::FormDataDecoder;
pub(crate) use url_encoded_decoder::UrlEncodedDecoder;

/// The body representations, chosen by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    FormData,
    UrlEncoded,
    Json,
    Plain,
}

impl BodyKind {
    /// Media types are compared ignoring ASCII case, so `Multipart/Form-Data` is
    /// form data too. Unknown ones are plain text.
    fn from_content_type(value: &str) -> Self {
        if value.eq_ignore_ascii_case(mime::MULTIPART_FORM_DATA.essence_str()) {
            BodyKind::FormData
        } else if value.eq_ignore_ascii_case(mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()) {
            BodyKind::UrlEncoded
        } else if value.eq_ignore_ascii_case(mime::APPLICATION_JSON.essence_str()) {
            BodyKind::Json
        } else {
            BodyKind::Plain
        }
    }
}

/// Decoder for a non-empty raw body.
///
/// Holds the first value of the request's `Content-Type` header, if any; its
/// parameters carry the boundary of multipart bodies.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BodyDecoder<'h> {
    content_type: Option<&'h HeaderValue>,
}

impl<'h> BodyDecoder<'h> {
    pub(crate) fn new(content_type: Option<&'h HeaderValue>) -> Self {
        Self { content_type }
    }
}

impl Decode for BodyDecoder<'_> {
    type Item = Body;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let Some(content_type) = self.content_type else {
            trace!(body_size = src.len(), "no content type, keeping body as plain text");
            return Ok(Body::Plain { raw: src.to_string() });
        };

        let kind = BodyKind::from_content_type(content_type.value());
        trace!(content_type = content_type.value(), ?kind, body_size = src.len(), "decoding request body");

        let body = match kind {
            BodyKind::FormData => {
                let params = content_type.params().ok_or_else(InvalidRequestError::missing_boundary)?;
                let decoder = FormDataDecoder::from_params(params)?;
                let params = decoder.decode(src)?;
                Body::FormData { boundary: decoder.into_boundary(), params }
            }
            BodyKind::UrlEncoded => Body::UrlEncoded { params: UrlEncodedDecoder.decode(src)? },
            BodyKind::Json => Body::Json { raw: src.to_string() },
            BodyKind::Plain => Body::Plain { raw: src.to_string() },
        };

        Ok(body)
    }
}
