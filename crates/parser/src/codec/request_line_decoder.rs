//! Decoder for the first line of a request message, `[Method] [Url] [Protocol]`.
//!
//! The url must be absolute, `[Protocol]://[Address]`. Tokens are only normalized,
//! never checked against known methods, schemes or versions.

use crate::codec::Decode;
use crate::ensure;
use crate::protocol::InvalidRequestError;
use crate::utils::split_two_parts;

const TOKEN_SEPARATOR: char = ' ';

const SCHEME_SEPARATOR: &str = "://";

/// The decoded request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestLine {
    pub(crate) method: String,
    pub(crate) protocol: String,
    pub(crate) url: String,
    pub(crate) protocol_version: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RequestLineDecoder;

impl Decode for RequestLineDecoder {
    type Item = RequestLine;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let tokens: Vec<&str> = src.split(TOKEN_SEPARATOR).collect();
        ensure!(tokens.len() == 3, InvalidRequestError::invalid_first_line(src));

        let (method, url, version) = (tokens[0], tokens[1], tokens[2]);

        let (protocol, address) = split_two_parts(url, SCHEME_SEPARATOR).ok_or_else(|| InvalidRequestError::invalid_url(url))?;

        Ok(RequestLine {
            method: method.to_uppercase(),
            protocol: protocol.to_uppercase(),
            url: address.to_lowercase(),
            protocol_version: version.to_uppercase(),
        })
    }
}
