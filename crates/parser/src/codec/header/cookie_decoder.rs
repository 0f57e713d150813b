use crate::codec::Decode;
use crate::ensure;
use crate::protocol::{Cookie, InvalidRequestError};
use crate::utils::{split_one_or_two_parts, split_two_parts};

const PAIR_SEPARATOR: char = ';';

const VALUE_SEPARATOR: char = '=';

/// Decoder for the cookie line, `Cookie: [Name1]=[Value1];[Name2]=[Value2]...`.
///
/// Pairs are split on their first `=`, so values may contain `=`. A pair without
/// a name, like `=1`, is dropped instead of failing the whole line.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CookieDecoder;

impl Decode for CookieDecoder {
    type Item = Vec<Cookie>;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        // a blank `Cookie:` line fails here, its value part is empty
        let (_, pairs) = split_two_parts(src, ":").ok_or_else(|| InvalidRequestError::invalid_cookie_line(src))?;

        let pairs: Vec<&str> = pairs.split(PAIR_SEPARATOR).collect();
        ensure!(!pairs.is_empty(), InvalidRequestError::invalid_cookie_line(src));

        let cookies = pairs
            .into_iter()
            .filter_map(|pair| {
                let (name, value) = split_one_or_two_parts(pair, VALUE_SEPARATOR);
                (!name.is_empty()).then(|| Cookie::new(name, value))
            })
            .collect();

        Ok(cookies)
    }
}
