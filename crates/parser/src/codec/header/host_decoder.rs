use crate::codec::Decode;
use crate::protocol::InvalidRequestError;
use crate::utils::split_two_parts;

/// Decoder for the host line, `[Host]: [Value]`, yielding the trimmed value.
///
/// The line name is not checked, any `name: value` line in second position is
/// taken as host line.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HostDecoder;

impl Decode for HostDecoder {
    type Item = String;

    fn decode(&self, src: &str) -> Result<Self::Item, InvalidRequestError> {
        let (_, host) = split_two_parts(src, ":").ok_or_else(|| InvalidRequestError::invalid_host_line(Some(src)))?;
        Ok(host.to_string())
    }
}
