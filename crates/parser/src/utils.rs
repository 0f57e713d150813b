//! Utility macros and functions shared by the decoders.
//!
//! This module provides the early-return macro and the string splitting helpers
//! every line decoder is built on.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
/// It's useful for validation checks where you want to return early with an error
/// if some condition is not satisfied.
///
/// # Arguments
///
/// * `$predicate` - A boolean expression that should evaluate to true
/// * `$error` - The error value to return if the predicate is false
///
/// # Example
///
/// ```ignore
/// ensure!(tokens.len() == 3, InvalidRequestError::invalid_first_line(line));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Splits `src` at the first `delimiter` into two trimmed parts.
///
/// Returns `None` if the delimiter is missing or either part is empty after trimming,
/// so `"Host: app.com"` yields `("Host", "app.com")` while `"Host:"` and `": app.com"`
/// yield nothing.
pub(crate) fn split_two_parts<'a>(src: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let (left, right) = src.split_once(delimiter)?;
    let (left, right) = (left.trim(), right.trim());
    (!left.is_empty() && !right.is_empty()).then_some((left, right))
}

/// Splits `src` at the first `delimiter` into a trimmed head and, if the delimiter is
/// present, a trimmed tail. Both parts may be empty.
pub(crate) fn split_one_or_two_parts(src: &str, delimiter: char) -> (&str, Option<&str>) {
    match src.split_once(delimiter) {
        Some((head, tail)) => (head.trim(), Some(tail.trim())),
        None => (src.trim(), None),
    }
}
