use serde::Serialize;

/// A `name=value` pair from the `Cookie` header line.
///
/// `value` is `None` when the pair has no `=` at all, `Cookie: flag` yields a
/// cookie named `flag` without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cookie {
    name: String,
    value: Option<String>,
}

impl Cookie {
    pub fn new<S: Into<String>>(name: S, value: Option<S>) -> Self {
        Self { name: name.into(), value: value.map(Into::into) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
