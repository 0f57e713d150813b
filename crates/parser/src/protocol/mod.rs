//! Data model of a parsed request message.
//!
//! Everything here is an immutable value produced by one parse call:
//!
//! - **Request** ([`request`]): [`ParsedRequest`], the top level result
//! - **Headers** ([`header`]): [`Header`] entries with their [`HeaderValue`]s
//! - **Cookies** ([`cookie`]): [`Cookie`] pairs from the `Cookie` line
//! - **Body** ([`body`]): the [`Body`] decoded according to its content type
//!   - [`FormDataParam`]: a part of a `multipart/form-data` body
//!   - [`UrlEncodedParam`]: a pair of an `application/x-www-form-urlencoded` body
//! - **Error Handling** ([`error`]): [`InvalidRequestError`] and its [`ErrorKind`]

mod request;
pub use request::ParsedRequest;
pub(crate) use request::find_content_type;

mod header;
pub use header::Header;
pub use header::HeaderValue;

mod cookie;
pub use cookie::Cookie;

mod body;
pub use body::Body;
pub use body::FormDataParam;
pub use body::UrlEncodedParam;

mod error;
pub use error::ErrorKind;
pub use error::InvalidRequestError;
