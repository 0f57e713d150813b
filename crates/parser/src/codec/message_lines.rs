//! Splits a request message into the lines every other decoder works on.
//!
//! The message is cut at the first blank line (`"\n\n"`). Everything before it is
//! the header block, split on `\n`: the first line is the request line, the second
//! the host line and the first later line starting with `Cookie:` is set aside as
//! the cookie line. Everything after the blank line is the raw body.

use tracing::trace;

use crate::ensure;
use crate::protocol::InvalidRequestError;

const HEADER_BODY_SEPARATOR: &str = "\n\n";

const COOKIE_PREFIX: &str = "Cookie:";

/// Index of the first line that may hold the cookie, the request line and the
/// host line are never taken as cookie line.
const FIRST_HEADER_LINE: usize = 2;

/// Optional bounds on the header block, unset fields mean no bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HeaderLimits {
    pub(crate) max_header_bytes: Option<usize>,
    pub(crate) max_header_lines: Option<usize>,
}

/// The segmented request message, borrowing from the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageLines<'a> {
    pub(crate) request_line: &'a str,
    pub(crate) host_line: Option<&'a str>,
    pub(crate) header_lines: Vec<&'a str>,
    pub(crate) cookie_line: Option<&'a str>,
    /// `None` when nothing follows the blank line.
    pub(crate) body: Option<&'a str>,
}

impl<'a> MessageLines<'a> {
    /// Segments `message`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestError` if:
    /// - the message is empty
    /// - there is no blank line between headers and body
    /// - the header block is empty
    /// - the header block exceeds one of the `limits`
    pub(crate) fn split(message: &'a str, limits: HeaderLimits) -> Result<Self, InvalidRequestError> {
        ensure!(!message.is_empty(), InvalidRequestError::empty_message());

        let (header_block, body) =
            message.split_once(HEADER_BODY_SEPARATOR).ok_or_else(InvalidRequestError::missing_separator)?;

        if let Some(max_size) = limits.max_header_bytes {
            ensure!(header_block.len() <= max_size, InvalidRequestError::too_large_header(header_block.len(), max_size));
        }

        ensure!(!header_block.is_empty(), InvalidRequestError::no_headers());

        let mut lines: Vec<&'a str> = header_block.split('\n').collect();

        if let Some(max_num) = limits.max_header_lines {
            ensure!(lines.len() <= max_num, InvalidRequestError::too_many_headers(max_num));
        }

        let cookie_index = lines.iter().skip(FIRST_HEADER_LINE).position(|line| line.starts_with(COOKIE_PREFIX));
        let cookie_line = cookie_index.map(|index| lines.remove(index + FIRST_HEADER_LINE));

        let mut lines = lines.into_iter();
        let Some(request_line) = lines.next() else {
            return Err(InvalidRequestError::no_headers());
        };
        let host_line = lines.next();
        let header_lines: Vec<&'a str> = lines.collect();

        let body = (!body.is_empty()).then_some(body);

        trace!(
            header_lines = header_lines.len(),
            has_cookie = cookie_line.is_some(),
            body_size = body.map_or(0, str::len),
            "segmented request message"
        );

        Ok(Self { request_line, host_line, header_lines, cookie_line, body })
    }
}
