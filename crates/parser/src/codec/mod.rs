//! Decoders turning a request message into a [`ParsedRequest`](crate::protocol::ParsedRequest).
//!
//! Parsing is a single pass over one in-memory string, run as a pipeline of
//! small decoders that all implement [`Decode`]:
//!
//! 1. Line segmentation: request line, host line, header lines, cookie line and body
//! 2. Request line decoding: method, protocol, url and protocol version
//! 3. Host line decoding
//! 4. Header decoding via [`header`] module, one entry per header line
//! 5. Cookie decoding via [`header`] module
//! 6. Body decoding via [`body`] module, selected by the `Content-Type` header
//!
//! [`RequestParser`] coordinates the stages and stops at the first failure.
//!
//! # Example
//!
//! ```
//! use http_request_parser::codec::RequestParser;
//!
//! let parser = RequestParser::builder().default_limits().build();
//! let request = parser.parse("GET http://app.com/ HTTP/1.1\nHost: app.com\n\n").unwrap();
//!
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.host(), "app.com");
//! ```

use crate::protocol::InvalidRequestError;

mod body;
mod header;
mod message_lines;
mod request_decoder;
mod request_line_decoder;

pub use request_decoder::RequestParser;
pub use request_decoder::RequestParserBuilder;
pub use request_decoder::{DEFAULT_MAX_HEADER_BYTES, DEFAULT_MAX_HEADER_LINES};

/// A decoder for one fragment of a request message.
///
/// Decoders are stateless: the same input always yields the same item or the same
/// error, and no decoder ever returns a partial item.
pub trait Decode {
    type Item;

    /// Decodes `src`, which is a single line or the raw body depending on the decoder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestError` naming the violated rule and the offending text.
    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError>;
}
