//! Decoders for the `name: value` lines of the header block.
//!
//! # Components
//!
//! - [`HostDecoder`]: the host line, second line of the message
//! - [`HeaderDecoder`]: every other header line
//!   - Splits comma separated values
//!   - Keeps the `;` parameter string of each value unparsed
//! - [`CookieDecoder`]: the `Cookie` line set aside during segmentation
//!   - Splits `;` separated `name=value` pairs
//!   - Drops pairs without a name
//!
//! All three share the same line shape: the text before the first `:` is the
//! name, the rest is the value, and neither may be empty after trimming.

mod cookie_decoder;
mod header_decoder;
mod host_decoder;

pub(crate) use cookie_decoder::CookieDecoder;
pub(crate) use header_decoder::HeaderDecoder;
pub(crate) use host_decoder::HostDecoder;
