//! The structured form of a request message.

use serde::Serialize;

use crate::protocol::{Body, Cookie, Header, HeaderValue};

/// A request message decoded by [`crate::RequestParser`].
///
/// Method, protocol and protocol version are uppercased, the url is lowercased.
/// The `Host` and `Cookie` lines are taken out of the header list and exposed
/// through [`host`](Self::host) and [`cookie`](Self::cookie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    method: String,
    protocol: String,
    url: String,
    protocol_version: String,
    host: String,
    headers: Vec<Header>,
    cookie: Option<Vec<Cookie>>,
    body: Option<Body>,
}

impl ParsedRequest {
    #[allow(clippy::too_many_arguments, reason = "mirrors the fields of the request message one to one")]
    pub fn new(
        method: String,
        protocol: String,
        url: String,
        protocol_version: String,
        host: String,
        headers: Vec<Header>,
        cookie: Option<Vec<Cookie>>,
        body: Option<Body>,
    ) -> Self {
        Self { method, protocol, url, protocol_version, host, headers, cookie, body }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the scheme of the request url, e.g. `HTTP` or `HTTPS`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Returns the request url without its scheme, e.g. `app.com/features?p1=v1`.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the version token of the request line, e.g. `HTTP/1.1`.
    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// `None` when the message has no `Cookie` line.
    pub fn cookie(&self) -> Option<&[Cookie]> {
        self.cookie.as_deref()
    }

    /// `None` when nothing follows the blank line after the headers.
    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Returns the first header with the given name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&Header> {
        find_header(&self.headers, name)
    }

    /// Returns the first value of the `Content-Type` header.
    pub fn content_type(&self) -> Option<&HeaderValue> {
        find_content_type(&self.headers)
    }

    /// Returns the value of the first cookie with exactly the given name.
    ///
    /// A cookie written without `=` is present but has no value, so this
    /// returns `Some(None)` for it.
    pub fn cookie_value(&self, name: &str) -> Option<Option<&str>> {
        self.cookie()?.iter().find(|cookie| cookie.name() == name).map(Cookie::value)
    }
}

pub(crate) fn find_header<'h>(headers: &'h [Header], name: &str) -> Option<&'h Header> {
    headers.iter().find(|header| header.is(name))
}

pub(crate) fn find_content_type(headers: &[Header]) -> Option<&HeaderValue> {
    find_header(headers, http::header::CONTENT_TYPE.as_str())?.first_value()
}
