//! A parser for raw HTTP request messages
//!
//! This crate turns a complete request message, held in memory as one string, into
//! a structured [`ParsedRequest`]: request line, host, headers with their values and
//! parameters, cookies and a body decoded according to its content type.
//!
//! It is a text decoder, not a server: nothing here reads sockets or streams bytes.
//!
//! # Features
//!
//! - Request line decoding with normalized method, protocol, url and version
//! - Multi-value headers with unparsed `;` parameters
//! - Cookie pairs from the `Cookie` line
//! - Body decoding for `multipart/form-data` and `application/x-www-form-urlencoded`,
//!   verbatim `application/json` and plain text
//! - Typed errors naming the violated rule and the offending text
//! - Optional limits on the header block
//!
//! # Example
//!
//! ```
//! use http_request_parser::Body;
//!
//! let message = "POST http://app.com/login HTTP/1.1\n\
//!                Host: app.com\n\
//!                Content-Type: application/x-www-form-urlencoded; charset=UTF-8\n\
//!                Cookie: sessionid=456def\n\
//!                \n\
//!                id=11&message=Hello";
//!
//! let request = http_request_parser::parse(message).unwrap();
//!
//! assert_eq!(request.method(), "POST");
//! assert_eq!(request.protocol(), "HTTP");
//! assert_eq!(request.url(), "app.com/login");
//! assert_eq!(request.host(), "app.com");
//! assert_eq!(request.cookie_value("sessionid"), Some(Some("456def")));
//!
//! let Some(Body::UrlEncoded { params }) = request.body() else { panic!("url encoded body expected") };
//! assert_eq!(params[1].name(), "message");
//! assert_eq!(params[1].value(), "Hello");
//! ```
//!
//! # Message Format
//!
//! ```text
//! [Method] [Protocol]://[Address] [Version]
//! Host: [Value]
//! [HeaderName]: [Value][; Params], [Value][; Params] ...
//! Cookie: [Name1]=[Value1]; [Name2]=[Value2] ...
//!
//! [Body]
//! ```
//!
//! Lines are separated by `\n` and headers are separated from the body by one blank
//! line, which is required even when there is no body.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: the parsed request data model and the error types
//! - [`codec`]: the decoders and the [`RequestParser`] running them
//!
//! # Error Handling
//!
//! Every failure is an [`InvalidRequestError`]. Its [`ErrorKind`] tells which rule
//! was violated and its display text reads
//! `Invalid request message. [Message]. Data: [Offending text].`
//!
//! # Logging
//!
//! Decoding stages emit `trace` level events through `tracing`. Errors are returned,
//! never logged.

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use codec::RequestParser;
pub use protocol::{Body, Cookie, ErrorKind, FormDataParam, Header, HeaderValue, InvalidRequestError, ParsedRequest, UrlEncodedParam};

/// Parses a complete request message with a [`RequestParser`] without limits.
///
/// # Errors
///
/// Returns [`InvalidRequestError`] when the message does not follow the request
/// message grammar, see [`RequestParser::parse`].
pub fn parse(message: &str) -> Result<ParsedRequest, InvalidRequestError> {
    RequestParser::new().parse(message)
}
