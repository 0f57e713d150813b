//! Request messages shared by the parser benchmarks.

/// A benchmark input: a request message and the part of the parser it stresses.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    stage: ParseStage,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, stage: ParseStage, file: TestFile) -> Self {
        Self { name, stage, file }
    }

    pub fn headers(name: &'static str, file: TestFile) -> Self {
        Self::new(name, ParseStage::Headers, file)
    }

    pub fn body(name: &'static str, file: TestFile) -> Self {
        Self::new(name, ParseStage::Body, file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stage(&self) -> ParseStage {
        self.stage
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn message(&self) -> &'static str {
        self.file.content
    }
}

/// A request message embedded from `resources/request`.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Message size in bytes, used as benchmark throughput.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Which decoding work dominates a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStage {
    /// Request line, headers and cookies, no body.
    Headers,
    /// A url-encoded or multipart body.
    Body,
}

impl ParseStage {
    pub fn group_name(self) -> &'static str {
        match self {
            ParseStage::Headers => "parse_headers",
            ParseStage::Body => "parse_body",
        }
    }
}
