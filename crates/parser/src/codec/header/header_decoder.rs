//! Decoder for a single header line, `[HeaderName]: [HeaderValues]`.
//!
//! The value part is a comma separated list. Each element may carry a parameter
//! string after its first `;`, which is kept as written:
//!
//! ```text
//! Accept-Language: ru-RU,ru;q=0.8,en-US;q=0.6
//!                  ^^^^^ ^^ ^^^^^ ^^^^^ ^^^^^
//!                  value |  params |    params
//!                        value     value
//! ```
//!
//! Empty elements are rejected, so a trailing comma is an error. Duplicate
//! header names are not merged, each line is decoded on its own.

use crate::codec::Decode;
use crate::ensure;
use crate::protocol::{Header, HeaderValue, InvalidRequestError};
use crate::utils::{split_one_or_two_parts, split_two_parts};

const NAME_SEPARATOR: &str = ":";

const VALUE_SEPARATOR: char = ',';

const PARAMS_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HeaderDecoder;

impl Decode for HeaderDecoder {
    type Item = Header;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let (name, values) = split_two_parts(src, NAME_SEPARATOR).ok_or_else(|| InvalidRequestError::invalid_header_line(src))?;

        let segments: Vec<&str> = values.split(VALUE_SEPARATOR).collect();
        ensure!(
            !segments.is_empty() && segments.iter().all(|segment| !segment.trim().is_empty()),
            InvalidRequestError::invalid_header_line(src)
        );

        let values = segments
            .into_iter()
            .map(|segment| {
                let (value, params) = split_one_or_two_parts(segment, PARAMS_SEPARATOR);
                HeaderValue::new(value, params)
            })
            .collect();

        Ok(Header::new(name, values))
    }
}
