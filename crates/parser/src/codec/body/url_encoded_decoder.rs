use crate::codec::Decode;
use crate::protocol::{InvalidRequestError, UrlEncodedParam};

const PARAM_SEPARATOR: char = '&';

const VALUE_SEPARATOR: char = '=';

/// Decoder for `application/x-www-form-urlencoded` bodies, `id=11&message=Hello`.
///
/// Every `&` separated segment must contain exactly one `=`. Segments with an
/// empty name are dropped. Names and values are kept as written, without
/// trimming or percent-decoding.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UrlEncodedDecoder;

impl Decode for UrlEncodedDecoder {
    type Item = Vec<UrlEncodedParam>;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let mut params = Vec::new();
        for param in src.split(PARAM_SEPARATOR) {
            let pieces: Vec<&str> = param.split(VALUE_SEPARATOR).collect();
            let [name, value] = pieces.as_slice() else {
                return Err(InvalidRequestError::invalid_url_encoded_param(param));
            };

            if !name.is_empty() {
                params.push(UrlEncodedParam::new(*name, *value));
            }
        }
        Ok(params)
    }
}
