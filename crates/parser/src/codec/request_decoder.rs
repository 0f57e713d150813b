//! HTTP request message parser
//!
//! This module provides [`RequestParser`], which coordinates the line segmenter
//! and the line and body decoders to turn a whole request message into a
//! [`ParsedRequest`].
//!
//! # Example
//!
//! ```
//! use http_request_parser::codec::RequestParser;
//!
//! let parser = RequestParser::new();
//! let request = parser.parse("GET http://a.com/x HTTP/1.1\nHost: a.com\nAccept: */*\n\n").unwrap();
//!
//! assert_eq!(request.url(), "a.com/x");
//! assert_eq!(request.headers().len(), 1);
//! assert!(request.body().is_none());
//! ```

use crate::codec::Decode;
use crate::codec::body::BodyDecoder;
use crate::codec::header::{CookieDecoder, HeaderDecoder, HostDecoder};
use crate::codec::message_lines::{HeaderLimits, MessageLines};
use crate::codec::request_line_decoder::RequestLineDecoder;
use crate::protocol::{Header, InvalidRequestError, ParsedRequest, find_content_type};

/// Maximum size in bytes of the header block applied by [`RequestParserBuilder::default_limits`]
pub const DEFAULT_MAX_HEADER_BYTES: usize = 8 * 1024;

/// Maximum number of header block lines applied by [`RequestParserBuilder::default_limits`]
pub const DEFAULT_MAX_HEADER_LINES: usize = 64;

/// A parser for complete HTTP request messages.
///
/// The parser runs in stages:
/// 1. Segmentation: splits the message into request line, host line, header lines,
///    cookie line and raw body
/// 2. Line decoding: request line, host, headers and cookies
/// 3. Body decoding: chosen by the decoded `Content-Type` header
///
/// Any failure aborts the whole parse, no partial request is ever returned.
///
/// The parser holds only its limits, it is cheap to copy and can be shared
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestParser {
    limits: HeaderLimits,
}

impl RequestParser {
    /// Creates a parser without limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RequestParserBuilder {
        RequestParserBuilder::new()
    }

    /// Parses a complete request message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequestError` if:
    /// - The message has no blank line between headers and body
    /// - The request line is not `[Method] [Protocol]://[Address] [Version]`
    /// - The host, a header or the cookie line is not `[Name]: [Value]`
    /// - A header has an empty comma separated value
    /// - The body does not match its `Content-Type`
    /// - The header block exceeds a configured limit
    pub fn parse(&self, message: &str) -> Result<ParsedRequest, InvalidRequestError> {
        let lines = MessageLines::split(message, self.limits)?;

        let request_line = RequestLineDecoder.decode(lines.request_line)?;

        let host = match lines.host_line {
            Some(line) => HostDecoder.decode(line)?,
            None => return Err(InvalidRequestError::invalid_host_line(None)),
        };

        let headers = lines.header_lines.iter().map(|line| HeaderDecoder.decode(line)).collect::<Result<Vec<Header>, _>>()?;

        let cookie = lines.cookie_line.map(|line| CookieDecoder.decode(line)).transpose()?;

        let body = lines.body.map(|body| BodyDecoder::new(find_content_type(&headers)).decode(body)).transpose()?;

        Ok(ParsedRequest::new(
            request_line.method,
            request_line.protocol,
            request_line.url,
            request_line.protocol_version,
            host,
            headers,
            cookie,
            body,
        ))
    }
}

/// Builder for [`RequestParser`], every limit is unset until configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestParserBuilder {
    limits: HeaderLimits,
}

impl RequestParserBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Rejects messages whose header block, everything before the blank line, is
    /// longer than `max_size` bytes.
    pub fn max_header_bytes(mut self, max_size: usize) -> Self {
        self.limits.max_header_bytes = Some(max_size);
        self
    }

    /// Rejects messages whose header block, request and host line included, has
    /// more than `max_num` lines.
    pub fn max_header_lines(mut self, max_num: usize) -> Self {
        self.limits.max_header_lines = Some(max_num);
        self
    }

    /// Applies [`DEFAULT_MAX_HEADER_BYTES`] and [`DEFAULT_MAX_HEADER_LINES`].
    pub fn default_limits(self) -> Self {
        self.max_header_bytes(DEFAULT_MAX_HEADER_BYTES).max_header_lines(DEFAULT_MAX_HEADER_LINES)
    }

    pub fn build(self) -> RequestParser {
        RequestParser { limits: self.limits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Body, Cookie, ErrorKind, FormDataParam, HeaderValue, UrlEncodedParam};
    use indoc::indoc;

    const HEADER_LINES: [&str; 8] = [
        "GET http://app.com/features?p1=v1 HTTP/1.1",
        "Host: app.com",
        "Connection: keep-alive",
        "Cache-Control: no-cache",
        "User-Agent: Mozilla/5.0 (Windows NT 6.1 WOW64)",
        "Accept: */*",
        "Accept-Encoding: gzip,deflate",
        "Accept-Language: ru-RU,ru;q=0.8,en-US;q=0.6,en;q=0.4",
    ];

    /// Joins header lines, the blank separator line and body lines into a message.
    fn message(headers: &[&str], body: &[&str]) -> String {
        let mut lines = headers.to_vec();
        lines.push("");
        lines.extend_from_slice(body);
        if body.is_empty() {
            lines.push("");
        }
        lines.join("\n")
    }

    fn expected_headers() -> Vec<Header> {
        vec![
            Header::new("Connection", vec![HeaderValue::new("keep-alive", None)]),
            Header::new("Cache-Control", vec![HeaderValue::new("no-cache", None)]),
            Header::new("User-Agent", vec![HeaderValue::new("Mozilla/5.0 (Windows NT 6.1 WOW64)", None)]),
            Header::new("Accept", vec![HeaderValue::new("*/*", None)]),
            Header::new("Accept-Encoding", vec![HeaderValue::new("gzip", None), HeaderValue::new("deflate", None)]),
            Header::new(
                "Accept-Language",
                vec![
                    HeaderValue::new("ru-RU", None),
                    HeaderValue::new("ru", Some("q=0.8")),
                    HeaderValue::new("en-US", Some("q=0.6")),
                    HeaderValue::new("en", Some("q=0.4")),
                ],
            ),
        ]
    }

    fn expected_request(headers: Vec<Header>, cookie: Option<Vec<Cookie>>, body: Option<Body>) -> ParsedRequest {
        ParsedRequest::new(
            "GET".into(),
            "HTTP".into(),
            "app.com/features?p1=v1".into(),
            "HTTP/1.1".into(),
            "app.com".into(),
            headers,
            cookie,
            body,
        )
    }

    fn parse(message: &str) -> Result<ParsedRequest, InvalidRequestError> {
        RequestParser::new().parse(message)
    }

    #[test]
    fn minimal_request() {
        let request = parse("GET http://a.com/x HTTP/1.1\nHost: a.com\nAccept: */*\n\n").unwrap();

        assert_eq!(
            request,
            ParsedRequest::new(
                "GET".into(),
                "HTTP".into(),
                "a.com/x".into(),
                "HTTP/1.1".into(),
                "a.com".into(),
                vec![Header::new("Accept", vec![HeaderValue::new("*/*", None)])],
                None,
                None,
            )
        );
    }

    #[test]
    fn from_browser() {
        let request = parse(&message(&HEADER_LINES, &[])).unwrap();

        assert_eq!(request, expected_request(expected_headers(), None, None));
    }

    #[test]
    fn is_deterministic() {
        let message = message(&HEADER_LINES, &["plain text"]);

        assert_eq!(parse(&message).unwrap(), parse(&message).unwrap());
    }

    #[test]
    fn request_line_variants() {
        for (line, method, protocol, url, version) in [
            ("DELETE http://app.com/features?p1=v1 HTTP/1.1", "DELETE", "HTTP", "app.com/features?p1=v1", "HTTP/1.1"),
            ("GET https://app.com/features HTTP/1.1", "GET", "HTTPS", "app.com/features", "HTTP/1.1"),
            ("get http://APP.com/Features HTTP/1.0", "GET", "HTTP", "app.com/features", "HTTP/1.0"),
            ("GET http://app.com/features?p1=v1 http/2.0", "GET", "HTTP", "app.com/features?p1=v1", "HTTP/2.0"),
        ] {
            let mut headers = HEADER_LINES;
            headers[0] = line;

            let request = parse(&message(&headers, &[])).unwrap();

            assert_eq!(request.method(), method);
            assert_eq!(request.protocol(), protocol);
            assert_eq!(request.url(), url);
            assert_eq!(request.protocol_version(), version);
        }
    }

    #[test]
    fn rejects_invalid_request_line() {
        let mut headers = HEADER_LINES;
        headers[0] = "GEThttp://app.com/features?p1=v1 HTTP/1.1";

        let error = parse(&message(&headers, &[])).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid request message. First line must have format: [Method] [Url] [Protocol]. Data: GEThttp://app.com/features?p1=v1 HTTP/1.1."
        );

        headers[0] = "GET http:/app.com/features?p1=v1 HTTP/1.1";
        let error = parse(&message(&headers, &[])).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::InvalidUrl);
        assert_eq!(error.data(), Some("http:/app.com/features?p1=v1"));
    }

    #[test]
    fn host_line() {
        let mut headers = HEADER_LINES;
        headers[1] = "Host   :  app.com";
        assert_eq!(parse(&message(&headers, &[])).unwrap().host(), "app.com");

        headers[1] = "Host app.com";
        let error = parse(&message(&headers, &[])).unwrap_err();
        assert_eq!(error.to_string(), "Invalid request message. Host line must have format: [Host]: [Value]. Data: Host app.com.");
    }

    #[test]
    fn missing_host_line() {
        let error = parse("GET http://app.com/ HTTP/1.1\n\n").unwrap_err();

        assert_eq!(error.kind(), &ErrorKind::InvalidHostLine);
        assert_eq!(error.data(), None);
    }

    #[test]
    fn rejects_invalid_header() {
        for line in ["Connection keep-alive", "Connection: ", " : keep-alive", "Accept-Encoding: gzip,"] {
            let mut headers = HEADER_LINES;
            headers[2] = line;

            let error = parse(&message(&headers, &[])).unwrap_err();

            assert_eq!(error.kind(), &ErrorKind::InvalidHeaderLine);
            assert_eq!(error.data(), Some(line));
        }
    }

    #[test]
    fn duplicate_headers_are_kept() {
        let request = parse("GET http://app.com/ HTTP/1.1\nHost: app.com\nAccept: text/html\nAccept: */*\n\n").unwrap();

        assert_eq!(
            request.headers(),
            &[Header::new("Accept", vec![HeaderValue::new("text/html", None)]), Header::new("Accept", vec![HeaderValue::new("*/*", None)])]
        );
        assert_eq!(request.header("accept").unwrap().first_value().unwrap().value(), "text/html");
    }

    #[test]
    fn cookies() {
        let mut headers = HEADER_LINES.to_vec();
        headers.insert(4, "Cookie: csrftoken=123abc;sessionid=456def");

        let request = parse(&message(&headers, &[])).unwrap();

        let cookie = vec![Cookie::new("csrftoken", Some("123abc")), Cookie::new("sessionid", Some("456def"))];
        assert_eq!(request, expected_request(expected_headers(), Some(cookie), None));
        assert_eq!(request.cookie_value("sessionid"), Some(Some("456def")));
    }

    #[test]
    fn cookie_in_host_position_is_the_host() {
        let request = parse("GET http://app.com/ HTTP/1.1\nCookie: a=1\n\n").unwrap();

        assert_eq!(request.host(), "a=1");
        assert_eq!(request.cookie(), None);
    }

    #[test]
    fn cookie_without_name_is_dropped() {
        let request = parse("GET http://app.com/ HTTP/1.1\nHost: app.com\nCookie: =1\n\n").unwrap();

        assert_eq!(request.cookie(), Some(&[][..]));
    }

    #[test]
    fn rejects_blank_cookie_line() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Cookie: ");

        let error = parse(&message(&headers, &[])).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid request message. Cookie line must have format: Cookie: [Name1]=[Value1].... Data: Cookie: ."
        );
    }

    #[test]
    fn url_encoded_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: application/x-www-form-urlencoded; charset=UTF-8");
        headers.push("Content-Length: 301");

        let request = parse(&message(&headers, &["id=11&message=Hello"])).unwrap();

        let mut expected = expected_headers();
        expected.push(Header::new(
            "Content-Type",
            vec![HeaderValue::new("application/x-www-form-urlencoded", Some("charset=UTF-8"))],
        ));
        expected.push(Header::new("Content-Length", vec![HeaderValue::new("301", None)]));
        let body = Body::UrlEncoded { params: vec![UrlEncodedParam::new("id", "11"), UrlEncodedParam::new("message", "Hello")] };
        assert_eq!(request, expected_request(expected, None, Some(body)));
    }

    #[test]
    fn rejects_invalid_url_encoded_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: application/x-www-form-urlencoded; charset=UTF-8");

        let error = parse(&message(&headers, &["id=11&messageHello"])).unwrap_err();
        assert_eq!(error.to_string(), "Invalid request message. Invalid x-www-form-url-encode parameter. Data: messageHello.");

        let error = parse(&message(&headers, &["id=11&message=Hello& "])).unwrap_err();
        assert_eq!(error.to_string(), "Invalid request message. Invalid x-www-form-url-encode parameter. Data:  .");
    }

    #[test]
    fn form_data_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: multipart/form-data; boundary=------11136253119209");
        headers.push("Content-Length: 301");

        let body = [
            "-----------------------------11136253119209",
            "Content-Disposition: form-data; name=\"Name\"",
            "",
            "Smith",
            "-----------------------------11136253119209",
            "Content-Disposition: form-data; name=\"Age\"",
            "",
            "25",
            "-----------------------------11136253119209--",
        ];

        let request = parse(&message(&headers, &body)).unwrap();

        assert_eq!(
            request.content_type(),
            Some(&HeaderValue::new("multipart/form-data", Some("boundary=------11136253119209")))
        );
        assert_eq!(
            request.body(),
            Some(&Body::FormData {
                boundary: "------11136253119209".into(),
                params: vec![FormDataParam::new("Name", "Smith"), FormDataParam::new("Age", "25")],
            })
        );
    }

    #[test]
    fn rejects_invalid_form_data_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: multipart/form-data; boundary=------11136253119209");

        let body = [
            "-----------------------------11136253119209",
            "Content-Disposit: form-data; name=\"Name\"",
            "",
            "Smith",
            "-----------------------------11136253119209",
            "Content-Disposition: form-data;",
            "",
            "25",
            "-----------------------------11136253119209--",
        ];

        let error = parse(&message(&headers, &body)).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid request message. Invalid formData parameter. Data: \nContent-Disposit: form-data; name=\"Name\"\n\nSmith\n."
        );
    }

    #[test]
    fn rejects_form_data_without_boundary() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: multipart/form-data");

        let error = parse(&message(&headers, &["body"])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid request message. Request with ContentType=FormData must have a header with boundary."
        );

        for (content_type, data) in [("Content-Type: multipart/form-data; boundary", "boundary"), ("Content-Type: multipart/form-data; boundary=", "boundary=")] {
            let last = headers.len() - 1;
            headers[last] = content_type;

            let error = parse(&message(&headers, &["body"])).unwrap_err();
            assert_eq!(error.kind(), &ErrorKind::InvalidBoundary);
            assert_eq!(error.data(), Some(data));
        }
    }

    #[test]
    fn json_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: application/json");

        let request = parse(&message(&headers, &[r#"{{"p1": "v1"}, {"p2": "v2"}}"#])).unwrap();

        assert_eq!(request.body(), Some(&Body::Json { raw: r#"{{"p1": "v1"}, {"p2": "v2"}}"#.into() }));
    }

    #[test]
    fn plain_body() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: text/plain");

        let request = parse(&message(&headers, &["Plain text"])).unwrap();
        assert_eq!(request.body(), Some(&Body::Plain { raw: "Plain text".into() }));

        let request = parse(&message(&HEADER_LINES, &["Plain text"])).unwrap();
        assert_eq!(request.body(), Some(&Body::Plain { raw: "Plain text".into() }));
    }

    #[test]
    fn empty_body_is_absent() {
        let mut headers = HEADER_LINES.to_vec();
        headers.push("Content-Type: multipart/form-data");

        let request = parse(&message(&headers, &[])).unwrap();

        assert_eq!(request.body(), None);
    }

    #[test]
    fn from_chrome_with_form_data() {
        let str = indoc! {r##"
        POST http://localhost/test?dd=e HTTP/1.1
        Host: localhost
        Connection: keep-alive
        Content-Length: 135
        Content-Type: multipart/form-data; boundary=----WebKitFormBoundaryaR6AB9NJoRl7qj9u
        Accept: */*

        ---------------------------WebKitFormBoundaryaR6AB9NJoRl7qj9u
        Content-Disposition: form-data; name="a"

        123
        ---------------------------WebKitFormBoundaryaR6AB9NJoRl7qj9u--
        "##};

        let request = parse(str).unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.url(), "localhost/test?dd=e");
        assert_eq!(request.headers().len(), 4);
        assert_eq!(
            request.body(),
            Some(&Body::FormData {
                boundary: "----WebKitFormBoundaryaR6AB9NJoRl7qj9u".into(),
                params: vec![FormDataParam::new("a", "123")],
            })
        );
    }

    #[test]
    fn limits() {
        let message = message(&HEADER_LINES, &[]);

        let parser = RequestParser::builder().max_header_lines(4).build();
        assert_eq!(parser.parse(&message).unwrap_err().kind(), &ErrorKind::TooManyHeaders { max_num: 4 });

        let parser = RequestParser::builder().max_header_bytes(64).build();
        assert!(matches!(parser.parse(&message).unwrap_err().kind(), ErrorKind::TooLargeHeader { max_size: 64, .. }));

        let parser = RequestParser::builder().default_limits().build();
        assert!(parser.parse(&message).is_ok());
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestParser>();

        let parser = RequestParser::builder().default_limits().build();
        let message = message(&HEADER_LINES, &[]);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| parser.parse(&message))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap().host(), "app.com");
            }
        });
    }
}
