use thiserror::Error;

/// The grammar rule a request message violated.
///
/// The display text of each variant is the human readable message carried by
/// [`InvalidRequestError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("")]
    Unspecified,

    #[error("Request message must not be empty")]
    EmptyMessage,

    #[error("Request must contain headers and body, separated by two break lines")]
    MissingSeparator,

    #[error("No headers")]
    NoHeaders,

    #[error("Header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("Header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("First line must have format: [Method] [Url] [Protocol]")]
    InvalidFirstLine,

    #[error("Url in first line must have format: [Protocol]://[Address]")]
    InvalidUrl,

    #[error("Host line must have format: [Host]: [Value]")]
    InvalidHostLine,

    #[error("Header line must have format: [HeaderName]: [HeaderValues]")]
    InvalidHeaderLine,

    #[error("Cookie line must have format: Cookie: [Name1]=[Value1]...")]
    InvalidCookieLine,

    #[error("Request with ContentType=FormData must have a header with boundary")]
    MissingBoundary,

    #[error("Boundary param must have format: [boundary]=[value]")]
    InvalidBoundary,

    #[error("Invalid formData parameter")]
    InvalidFormDataParam,

    #[error("formData parameter name must have format: [Name]=\"[Value]\"")]
    InvalidFormDataParamName,

    #[error("Invalid x-www-form-url-encode parameter")]
    InvalidUrlEncodedParam,
}

/// Error returned when a request message can't be parsed.
///
/// Carries the violated rule and, when there is one, the fragment of the
/// message that violated it. It renders as
/// `Invalid request message. {message}. Data: {data}.`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.kind, .data))]
pub struct InvalidRequestError {
    kind: ErrorKind,
    data: Option<String>,
}

impl InvalidRequestError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, data: None }
    }

    pub fn with_data<S: ToString>(kind: ErrorKind, data: S) -> Self {
        Self { kind, data: Some(data.to_string()) }
    }

    pub fn empty_message() -> Self {
        Self::new(ErrorKind::EmptyMessage)
    }

    pub fn missing_separator() -> Self {
        Self::new(ErrorKind::MissingSeparator)
    }

    pub fn no_headers() -> Self {
        Self::new(ErrorKind::NoHeaders)
    }

    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::new(ErrorKind::TooLargeHeader { current_size, max_size })
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::new(ErrorKind::TooManyHeaders { max_num })
    }

    pub fn invalid_first_line<S: ToString>(line: S) -> Self {
        Self::with_data(ErrorKind::InvalidFirstLine, line)
    }

    pub fn invalid_url<S: ToString>(url: S) -> Self {
        Self::with_data(ErrorKind::InvalidUrl, url)
    }

    /// The host line is optional in the segmented message, a missing one is
    /// reported without data.
    pub fn invalid_host_line(line: Option<&str>) -> Self {
        Self { kind: ErrorKind::InvalidHostLine, data: line.map(str::to_string) }
    }

    pub fn invalid_header_line<S: ToString>(line: S) -> Self {
        Self::with_data(ErrorKind::InvalidHeaderLine, line)
    }

    pub fn invalid_cookie_line<S: ToString>(line: S) -> Self {
        Self::with_data(ErrorKind::InvalidCookieLine, line)
    }

    pub fn missing_boundary() -> Self {
        Self::new(ErrorKind::MissingBoundary)
    }

    pub fn invalid_boundary<S: ToString>(params: S) -> Self {
        Self::with_data(ErrorKind::InvalidBoundary, params)
    }

    pub fn invalid_form_data_param<S: ToString>(part: S) -> Self {
        Self::with_data(ErrorKind::InvalidFormDataParam, part)
    }

    pub fn invalid_form_data_param_name<S: ToString>(part: S) -> Self {
        Self::with_data(ErrorKind::InvalidFormDataParamName, part)
    }

    pub fn invalid_url_encoded_param<S: ToString>(param: S) -> Self {
        Self::with_data(ErrorKind::InvalidUrlEncodedParam, param)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Description of the violated rule, empty for [`ErrorKind::Unspecified`].
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The offending fragment of the request message, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl Default for InvalidRequestError {
    fn default() -> Self {
        Self::new(ErrorKind::Unspecified)
    }
}

impl From<ErrorKind> for InvalidRequestError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[allow(clippy::ref_option, reason = "called with the borrowed fields of the error")]
fn render(kind: &ErrorKind, data: &Option<String>) -> String {
    let message = kind.to_string();
    match (message.is_empty(), data) {
        (true, _) => "Invalid request message.".to_string(),
        (false, Some(data)) => format!("Invalid request message. {message}. Data: {data}."),
        (false, None) => format!("Invalid request message. {message}."),
    }
}
